use clap::Parser;
use divi_catalog::{cli, config, error, export, input, report};
use divi_catalog_common::export::HtmlOptions;
use divi_catalog_common::{extract_scrape, Catalog, CategoryNormalizer};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Extract { scrape, strict, samples } => {
            println!("📋 divi-catalog - カテゴリ抽出\n");

            let vocabulary = config.vocabulary()?;
            let normalizer = CategoryNormalizer::new(&vocabulary, config.accept_mode(strict));

            println!("[1/2] スクレイプCSVを読み込み中...");
            let text = input::read_scrape(&scrape)?;
            let outcome = extract_scrape(&text, &config.extraction, &normalizer);
            println!("✔ {}件のレコードを解析\n", outcome.stats.records);

            println!("[2/2] レポート作成中...\n");
            let catalog = Catalog::from_items(outcome.items.values().cloned());
            print!("{}", report::build_report(&outcome, &catalog, samples));
        }

        Commands::Generate { scrape, legacy, output, strict, xlsx, json } => {
            println!("📄 divi-catalog - カタログ生成\n");

            let vocabulary = config.vocabulary()?;
            let normalizer = CategoryNormalizer::new(&vocabulary, config.accept_mode(strict));

            // 1. スクレイプ抽出
            println!("[1/4] スクレイプCSVを解析中...");
            let text = input::read_scrape(&scrape)?;
            let outcome = extract_scrape(&text, &config.extraction, &normalizer);
            println!(
                "✔ {}件のDiviを抽出（URL {}件）\n",
                outcome.items.len(),
                outcome.url_count()
            );

            // 2. 旧一覧表
            println!("[2/4] 旧一覧表を読み込み中...");
            let overview = input::read_legacy(&legacy)?;
            println!(
                "✔ {}件（Partner {}件、PDF {}件）\n",
                overview.len(),
                overview.partner_count(),
                overview.pdf_count()
            );

            // 3. 統合
            println!("[3/4] 統合中...");
            let shared = overview
                .entries()
                .filter(|e| outcome.items.contains_key(&e.name))
                .count();
            let scrape_only = outcome.items.len() - shared;
            let legacy_only = overview.len() - shared;
            let catalog = Catalog::reconcile(outcome.items, &overview);
            println!(
                "✔ 合計{}件（スクレイプのみ {}件、旧一覧表のみ {}件、Partner {}件）\n",
                catalog.len(),
                scrape_only,
                legacy_only,
                catalog.partner_count()
            );

            // 4. 出力
            println!("[4/4] ファイルを生成中...");
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            let options = export::ExportOptions {
                xlsx,
                json,
                html: HtmlOptions {
                    title: config.page_title.clone(),
                    ..HtmlOptions::default()
                },
            };
            let written =
                export::export_catalog(&catalog, &config.output_files, &options, &output_dir)?;
            for file in &written {
                println!("  {} ({} bytes)", file.path.display(), file.size);
                println!("    sha256: {}", file.sha256);
            }

            println!("\n✅ 生成完了: {}ファイル", written.len());
        }

        Commands::Config { show, path, init } => {
            if init {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if path {
                println!("{}", Config::config_path()?.display());
            }

            if show || !(path || init) {
                println!("設定:");
                println!("  厳格モード: {}", if config.strict_categories { "有効" } else { "無効" });
                println!(
                    "  語彙ファイル: {}",
                    config
                        .vocabulary_file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                let vocabulary = config.vocabulary()?;
                println!(
                    "  語彙: {}カテゴリ、同義語 {}件",
                    vocabulary.categories().count(),
                    vocabulary.synonyms().count()
                );
                println!("  説明文の閾値: {}文字", config.extraction.prose_threshold);
                println!("  ページタイトル: {}", config.page_title);
            }
        }
    }

    Ok(())
}
