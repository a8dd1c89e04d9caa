use crate::stats::TrackedRepo;
use std::io::{self, Write};

const SEPARATOR_WIDTH: usize = 40;

pub const TITLE: &str = "📊 GitHub Repo Tracker";

/// Console summary of already-fetched repositories.
pub fn report<W: Write>(out: &mut W, tracked: &[TrackedRepo]) -> io::Result<()> {
    writeln!(out, "{TITLE}\n")?;

    for TrackedRepo { repo, stats } in tracked {
        writeln!(out, "🔹 {} ({})", stats.name, repo.owner)?;
        writeln!(out, "   ⭐ Stars: {}", stats.stars)?;
        writeln!(out, "   🍴 Forks: {}", stats.forks)?;
        writeln!(out, "   🐞 Open Issues: {}", stats.open_issues)?;
        writeln!(out, "   ⏱️ Last Updated: {}", stats.last_update)?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    }

    Ok(())
}
