use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    todolist::cli::run().await?;
    Ok(())
}
