//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::dataset::SourceConfig;
use crate::error::{Error, Result};
use crate::page::{index_range, HyperPage, PageServer};
use serde_json::json;

/// Page size used when neither the definition nor the caller provides one
const DEFAULT_PAGE_SIZE: usize = 10;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Page { page, page_size } => self.page(*page, *page_size),
            Commands::Hyper { page, page_size } => self.hyper(*page, *page_size),
            Commands::Info { page_size } => self.info(*page_size),
            Commands::Validate => self.validate(),
        }
    }

    /// Build the page server plus the effective default page size
    fn build_server(&self) -> Result<(PageServer, usize)> {
        if let Some(path) = &self.cli.dataset {
            let def = crate::loader::load_definition(path)?;
            tracing::debug!(name = %def.name, "loaded dataset definition");
            return Ok((PageServer::new(def.source_config()), def.default_page_size));
        }

        if let Some(path) = &self.cli.file {
            let source = SourceConfig::new(path)
                .with_delimiter(self.cli.delimiter)
                .with_header(!self.cli.no_header);
            return Ok((PageServer::new(source), DEFAULT_PAGE_SIZE));
        }

        Err(Error::config(
            "Dataset definition or data file not specified (use -d or -f)",
        ))
    }

    /// Fetch and print a raw page
    fn page(&self, page: usize, page_size: Option<usize>) -> Result<()> {
        let (server, default_size) = self.build_server()?;
        let page_size = page_size.unwrap_or(default_size);
        let rows = server.get_page(page, page_size)?;

        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(rows)?),
            OutputFormat::Pretty => {
                let (start, _) = index_range(page, page_size);
                for (i, row) in rows.iter().enumerate() {
                    println!("{:>6}  {}", start + i + 1, row.join(" | "));
                }
            }
        }

        Ok(())
    }

    /// Fetch and print a hypermedia envelope
    fn hyper(&self, page: usize, page_size: Option<usize>) -> Result<()> {
        let (server, default_size) = self.build_server()?;
        let hyper = server.get_hyper(page, page_size.unwrap_or(default_size))?;

        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&hyper)?),
            OutputFormat::Pretty => print_hyper_pretty(&hyper),
        }

        Ok(())
    }

    /// Print dataset statistics
    fn info(&self, page_size: Option<usize>) -> Result<()> {
        let (server, default_size) = self.build_server()?;
        let page_size = page_size.unwrap_or(default_size);
        let records = server.len()?;
        let total_pages = server.total_pages(page_size)?;
        let source = server.source().path().display().to_string();

        match self.cli.format {
            OutputFormat::Json => {
                let summary = json!({
                    "source": source,
                    "records": records,
                    "page_size": page_size,
                    "total_pages": total_pages,
                });
                println!("{summary}");
            }
            OutputFormat::Pretty => {
                println!("Source:      {source}");
                println!("Records:     {records}");
                println!("Page size:   {page_size}");
                println!("Total pages: {total_pages}");
            }
        }

        Ok(())
    }

    /// Validate a dataset definition file
    fn validate(&self) -> Result<()> {
        let path = self
            .cli
            .dataset
            .as_ref()
            .ok_or_else(|| Error::config("Definition file not specified (use -d flag)"))?;

        let def = crate::loader::load_definition(path)?;

        match self.cli.format {
            OutputFormat::Json => {
                let summary = json!({
                    "valid": true,
                    "name": def.name,
                    "source": def.source.path,
                });
                println!("{summary}");
            }
            OutputFormat::Pretty => {
                println!("Definition '{}' is valid", def.name);
            }
        }

        Ok(())
    }
}

/// Human-readable envelope output
fn print_hyper_pretty(hyper: &HyperPage<'_>) {
    let nav = |p: Option<usize>| p.map_or_else(|| "-".to_string(), |p| p.to_string());

    println!(
        "Page {} of {} ({} records)",
        hyper.page, hyper.total_pages, hyper.page_size
    );
    println!("prev: {}  next: {}", nav(hyper.prev_page), nav(hyper.next_page));

    for row in hyper.data {
        println!("  {}", row.join(" | "));
    }
}
