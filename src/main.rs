use anyhow::Result as AnyhowResult;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use product_matcher::{
    compute_fuzzy_score, default_report_path, display_csv_as_table, format_query, parse_args,
    run_batch, Catalog, Config, VectorDB,
};

#[tokio::main]
async fn main() -> AnyhowResult<()> {
    let args = parse_args();
    init_tracing(args.debug);

    let config = Config::load_from_yaml(&args.config)?;
    let catalog = Catalog::load(&config.catalog_path)?;
    info!(
        "Loaded {} catalog documents from {}",
        catalog.len(),
        config.catalog_path.display()
    );

    if args.reload {
        info!("Rebuilding category vector index at {}", config.db_path);
        VectorDB::new(&config.db_path, Some(&catalog), true).await?;
        info!("Vector index rebuilt");
    }

    if let Some(query) = args.query.as_deref() {
        run_single_query(&catalog, &config, query, args.top_k).await?;
    } else if let Some(input) = args.input.as_deref() {
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| default_report_path(&config.report_prefix));

        let summary = run_batch(&catalog, &config, input, &output)?;
        display_csv_as_table(&output, 20, 25)?;
        println!(
            "Batch complete: {} queries, {} direct hits, {} fuzzy hits",
            summary.queries, summary.direct_hits, summary.fuzzy_hits
        );
        println!("Results saved to: {}", output.display());
    }

    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Interactive mode: print the direct hits, their fuzzy rescoring and the
/// semantic category matches for one query.
async fn run_single_query(
    catalog: &Catalog,
    config: &Config,
    query: &str,
    top_k: usize,
) -> AnyhowResult<()> {
    let formatted = format_query(query);
    println!("Search string: '{}' (formatted: '{}')", query, formatted);

    let candidates = catalog.text_search(&formatted, config.search_limit);
    println!("\nDirect search results ({}):", candidates.len());
    for (i, hit) in candidates.iter().take(10).enumerate() {
        let document = catalog.document(hit.index);
        println!(
            "  {}. text score {:.2} - given name: '{}' - id: {}",
            i + 1,
            hit.score,
            document.given_name(),
            document.id
        );
    }

    let mut rescored: Vec<(usize, f32, f32)> = candidates
        .iter()
        .map(|hit| {
            (
                hit.index,
                compute_fuzzy_score(query, catalog.document(hit.index)),
                hit.score,
            )
        })
        .collect();
    rescored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    println!("\nFuzzy rescoring ({}):", rescored.len());
    for (i, (index, fuzzy, text)) in rescored.iter().take(10).enumerate() {
        let document = catalog.document(*index);
        println!(
            "  {}. fuzzy {:.2} (text {:.2}) - given name: '{}' - id: {}",
            i + 1,
            fuzzy,
            text,
            document.given_name(),
            document.id
        );
    }

    match VectorDB::new(&config.db_path, None, false).await {
        Ok(db) => {
            let matches = db.search_similar(query, top_k).await?;
            println!("\nSemantic category matches ({}):", matches.len());
            for (i, m) in matches.iter().enumerate() {
                println!(
                    "  {}. similarity {:.4} - {} (path: {})",
                    i + 1,
                    m.similarity,
                    m.category,
                    m.path
                );
            }
        }
        Err(e) => {
            warn!("Semantic index unavailable ({}); run --reload to build it", e);
        }
    }

    Ok(())
}
