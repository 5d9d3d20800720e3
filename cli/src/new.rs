use crate::error::{Result, ResultExt};
use changelog::{ChangelogConfig, new_changelog};

pub fn execute(repo: &str, branch: &str) -> Result<()> {
    let config = ChangelogConfig::default().with_default_branch(branch);
    let content = new_changelog(repo, &config).with_context(|| "--repo")?;
    print!("{content}");
    Ok(())
}
