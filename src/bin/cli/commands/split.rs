//! File-based splitting command.

use tracing::info;

use crate::cli::args::SplitArgs;
use crate::cli::output::render_split_report;
use townsplit_rs::io::wordlist::{read_candidates, read_vocabulary, write_vocabulary};
use townsplit_rs::Splitter;

/// Classify every name in the candidate file and rewrite both word lists
pub fn split_command(args: SplitArgs) -> anyhow::Result<()> {
    let paths = &args.vocabularies;

    // Every input is read before anything is written.
    let left = read_vocabulary(&paths.left_file)?;
    let right = read_vocabulary(&paths.right_file)?;
    let candidates = read_candidates(&args.new_words_file)?;

    let mut splitter = Splitter::new(left, right);
    splitter.run(&candidates);
    let (left, right, summary) = splitter.into_parts();

    info!(
        candidates = candidates.len(),
        new_left = summary.new_left_count,
        new_right = summary.new_right_count,
        unmatched = summary.unmatched.len(),
        "split finished"
    );

    write_vocabulary(&paths.left_file, &left)?;
    write_vocabulary(&paths.right_file, &right)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_split_report(&summary));
    }

    Ok(())
}
