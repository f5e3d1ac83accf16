mod gui; // dioxus shell
mod about; mod contact; mod home; mod lang; mod submit; mod types;
use anyhow::Result;

fn main() -> Result<()> {
    lang::init()?;
    gui::run()?;
    Ok(())
}
