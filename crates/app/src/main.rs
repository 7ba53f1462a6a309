mod accounts;
mod error;
mod parsing;
mod settings;
mod shell;

use crate::error::Result;

fn main() -> Result<()> {
    let settings = settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expense_tracker={level},engine={level}",
            level = settings.level
        ))
        .with_writer(std::io::stderr)
        .init();

    let accounts = accounts::Accounts::from_seed(&settings.accounts);
    let mut shell = shell::Shell::new(accounts);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    shell.run(stdin.lock(), &mut stdout)?;
    Ok(())
}
