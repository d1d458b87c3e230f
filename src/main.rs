fn main() -> anyhow::Result<()> {
    colortheme::run()?;
    Ok(())
}
