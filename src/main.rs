use clap::Parser;
use contact_book::app::render::{render, save_view};
use contact_book::core::{ConfigProvider, ContactSource};
use contact_book::utils::error::ErrorSeverity;
use contact_book::utils::{logger, validation::Validate};
use contact_book::{
    BookConfig, BuiltinSource, CliConfig, ContactBook, FileSource, LocalStorage, OutputFormat,
    Result, Session,
};
use std::path::Path;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let outcome = match config.validate() {
        Ok(()) => dispatch(&config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ contact-book failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn dispatch(config: &CliConfig) -> Result<()> {
    let storage = LocalStorage::default();

    match config.contacts_path() {
        Some(path) if is_toml(path) => {
            // A .toml contact book carries its own display defaults; CLI flags win over them.
            let book = BookConfig::from_storage(&storage, path).await?;
            book.validate()?;
            let query = config
                .query
                .clone()
                .unwrap_or_else(|| book.initial_query().to_string());
            let format: OutputFormat = match &config.format {
                Some(format) => format.parse()?,
                None => book.output_format().parse()?,
            };
            run(book, config, &storage, query, format).await
        }
        Some(path) => {
            let source = FileSource::new(storage.clone(), path);
            let format: OutputFormat = config.output_format().parse()?;
            run(source, config, &storage, config.initial_query().to_string(), format).await
        }
        None => {
            let format: OutputFormat = config.output_format().parse()?;
            run(BuiltinSource, config, &storage, config.initial_query().to_string(), format).await
        }
    }
}

async fn run<S: ContactSource>(
    source: S,
    config: &CliConfig,
    storage: &LocalStorage,
    query: String,
    format: OutputFormat,
) -> Result<()> {
    let mut browser = ContactBook::new(source).load().await?;
    browser.set_query(query);

    if let Some(position) = config.open {
        if browser.select_at(position).is_none() {
            tracing::warn!(
                "No contact at position {} ({} visible)",
                position,
                browser.visible_count()
            );
        }
    }

    if config.interactive {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        Session::new(&mut browser, format).run(stdin.lock(), &mut stdout)?;
    } else {
        print!("{}", render(&browser, format)?);
    }

    // In interactive mode this is the view the session ended on.
    if let Some(output) = &config.output {
        save_view(storage, output, &browser, format).await?;
    }

    Ok(())
}

fn is_toml(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}
