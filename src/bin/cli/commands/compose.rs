//! Name composition command.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::args::ComposeArgs;
use townsplit_rs::compose::compose_many;
use townsplit_rs::io::wordlist::read_vocabulary;

/// Print `count` names glued together from the two word lists
pub fn compose_command(args: ComposeArgs) -> anyhow::Result<()> {
    let left = read_vocabulary(&args.vocabularies.left_file)?;
    let right = read_vocabulary(&args.vocabularies.right_file)?;

    if left.is_empty() || right.is_empty() {
        anyhow::bail!("Both word lists need at least one entry to compose names");
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for name in compose_many(&left, &right, args.count, &mut rng) {
        println!("{}", name);
    }

    Ok(())
}
