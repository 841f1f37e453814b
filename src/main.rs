use clap::Parser;
use ragbase::cli::commands::{Cli, Commands};
use ragbase::config::RagConfig;
use ragbase::RagBase;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = RagConfig::from_env();

    let rag = match RagBase::new(&config) {
        Ok(rag) => rag,
        Err(e) => {
            eprintln!("Error initializing ragbase: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(rag, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(rag: RagBase, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Add { title, text, id } => {
            let id = id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            let embedding = rag.add_document(&id, &title, &text).await?;
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "id": id,
                    "dimension": embedding.len(),
                }))?
            );
        }
        Commands::Search { query, limit } => {
            let hits = rag.search_similar(&query, limit).await?;
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        Commands::Get { id } => {
            let doc = rag.get_document(&id)?;
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        Commands::List => {
            let docs = rag.get_all_documents()?;
            println!("{}", serde_json::to_string_pretty(&docs)?);
        }
        Commands::Delete { id } => {
            rag.delete_document(&id)?;
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "deleted": id }))?);
        }
        Commands::DeleteAll => {
            let result = rag.delete_all_documents()?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Info => {
            let info = rag.collection_info()?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Commands::Ask { question } => {
            let answer = rag.answer_question(&question).await?;
            println!("{answer}");
        }
    }
    Ok(())
}
