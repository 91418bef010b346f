use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordlist_args::ArgParser;
use wordlist_core::{CommandInfo, ParseResult, Schema, SchemaEntry, validate_schema};
use wordlist_corpus::{GenerateOptions, generate};

fn main() {
    init_tracing();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn words_schema() -> Schema {
    Schema::new()
        .with_entry(
            "words",
            SchemaEntry::sequence().with_description("a list of word files to process"),
        )
        .with_entry(
            "exclude",
            SchemaEntry::sequence().with_description("a list of exclude-word files"),
        )
        .with_entry(
            "out",
            SchemaEntry::scalar().with_description("out file path"),
        )
        .with_entry("w", SchemaEntry::alias_of("words"))
        .with_entry("e", SchemaEntry::alias_of("exclude"))
        .with_entry("o", SchemaEntry::alias_of("out"))
}

fn run() -> Result<(), String> {
    let schema = words_schema();
    if let Some(defect) = validate_schema(&schema).into_iter().next() {
        return Err(defect.to_string());
    }

    let parser = ArgParser::new()
        .with_info(CommandInfo::new(
            "words",
            "create a word list structure from files",
        ))
        .with_schema(schema);

    let Some(args) = parser.parse_env().map_err(|e| e.to_string())? else {
        return Ok(());
    };
    run_generate(&args)
}

fn run_generate(args: &ParseResult) -> Result<(), String> {
    let options = GenerateOptions::from_parse_result(args).map_err(|e| e.to_string())?;
    debug!(?options, "Resolved generate options");

    println!("generating word list to {}", options.out.display());
    let list = generate(&options).map_err(|e| e.to_string())?;
    list.write_json(&options.out).map_err(|e| e.to_string())?;

    let stats = serde_json::to_string_pretty(&list.length_stats()).map_err(|e| e.to_string())?;
    println!("word lengths:");
    println!("{stats}");
    println!("wrote {} words to {}", list.len(), options.out.display());
    Ok(())
}
