use brand_match::{cli, config, error, export, input, matcher, refine};
use brand_match_common::{build_query, BrandMatcher, BrandVocabulary, DescriptionRecord, QuerySource};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use input::columns::{self, BRAND_GUESSES, DESCRIPTION_GUESSES};
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// ブランドファイルを読み込んで語彙を作る
fn load_vocabulary(path: &Path, column: Option<&str>, sheet: Option<&str>) -> Result<BrandVocabulary> {
    let table = input::read_table(path, sheet)?;
    let idx = columns::resolve_column(&table.headers, column, BRAND_GUESSES)?;
    Ok(BrandVocabulary::build(table.column(idx)))
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Match {
            descriptions,
            brands,
            output,
            format,
            threshold,
            top_n,
            desc_column,
            id_column,
            brand_column,
            desc_sheet,
            brand_sheet,
            interactive,
            no_samples,
            limit,
        } => {
            println!("🔎 brand-match - ブランド照合\n");

            // 設定エラーは1行も処理する前に中断
            let settings = config.match_settings(threshold, top_n)?;

            // 1. 読み込み
            println!("[1/3] ファイルを読み込み中...");
            let desc_table = input::read_table(&descriptions, desc_sheet.as_deref())?;
            let brand_table = input::read_table(&brands, brand_sheet.as_deref())?;
            println!(
                "✔ 説明: {}行 {}列 / ブランド: {}行 {}列\n",
                desc_table.len(),
                desc_table.headers.len(),
                brand_table.len(),
                brand_table.headers.len()
            );

            let desc_column = desc_column.or(config.description_column.clone());
            let id_column = id_column.or(config.id_column.clone());
            let brand_column = brand_column.or(config.brand_column.clone());

            let (desc_idx, id_idx, brand_idx) = if interactive {
                let desc_default = columns::guess_column(&desc_table.headers, DESCRIPTION_GUESSES).unwrap_or(0);
                let brand_default = columns::guess_column(&brand_table.headers, BRAND_GUESSES).unwrap_or(0);
                (
                    input::select::select_column("説明文の列", &desc_table.headers, desc_default)?,
                    input::select::select_optional_column("識別子の列（任意）", &desc_table.headers)?,
                    input::select::select_column("ブランド名の列", &brand_table.headers, brand_default)?,
                )
            } else {
                (
                    columns::resolve_column(&desc_table.headers, desc_column.as_deref(), DESCRIPTION_GUESSES)?,
                    columns::resolve_optional_column(&desc_table.headers, id_column.as_deref())?,
                    columns::resolve_column(&brand_table.headers, brand_column.as_deref(), BRAND_GUESSES)?,
                )
            };
            println!(
                "- 説明列: {} / 識別子列: {} / ブランド列: {}",
                desc_table.headers[desc_idx],
                id_idx.map(|i| desc_table.headers[i].as_str()).unwrap_or("(なし)"),
                brand_table.headers[brand_idx]
            );

            let vocabulary = BrandVocabulary::build(brand_table.column(brand_idx));
            log::info!("ブランド語彙: {}件", vocabulary.len());
            let records = input::description_records(&desc_table, desc_idx, id_idx, limit);

            // 2. 照合
            println!(
                "[2/3] 照合中... (閾値: {}, 候補数: {})",
                settings.threshold(),
                settings.top_n()
            );
            let brand_matcher = BrandMatcher::new(vocabulary, settings);
            let results = matcher::match_descriptions(&brand_matcher, &records, !cli.verbose);
            let summary = matcher::MatchSummary::from_results(&results);
            println!("✔ {}件を照合", summary.total);
            println!(
                "  候補あり: {} / 確定: {} / 1語ブランド: {} / 該当なし: {} / 全文再照合: {}\n",
                summary.with_candidates,
                summary.confident,
                summary.single_word,
                summary.no_match,
                summary.fallbacks
            );

            // 3. 出力
            println!("[3/3] 結果を保存中...");
            let samples = if no_samples {
                Vec::new()
            } else {
                vec![
                    desc_table.to_sheet("descriptions_sample", export::SAMPLE_ROWS),
                    brand_table.to_sheet("brands_sample", export::SAMPLE_ROWS),
                ]
            };
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            let stem = export::default_stem(settings.top_n());
            let written = export::export_results(
                &results,
                id_idx.is_some(),
                &samples,
                &format,
                &output_dir,
                &stem,
            )?;
            for path in written {
                println!("✔ 出力: {}", path.display());
            }

            println!("\n✅ 照合完了");
        }

        Commands::Check { text, brands, brand_column, threshold, top_n } => {
            let settings = config.match_settings(threshold, top_n)?;
            let brand_column = brand_column.or(config.brand_column.clone());
            let vocabulary = load_vocabulary(&brands, brand_column.as_deref(), None)?;
            let brand_matcher = BrandMatcher::new(vocabulary, settings);

            let query = build_query(&text);
            let result = brand_matcher.match_one(&DescriptionRecord::new(text.as_str()));

            println!("説明: {}", text);
            println!("クエリ: {:?} ({})", query.text, query.source);
            if result.query_source == QuerySource::FallbackFullDescription {
                println!("  → 候補なし、全文で再照合");
            }
            println!("候補 (閾値 {} 以上, 上位 {}):", settings.threshold(), settings.top_n());
            if result.candidates.is_empty() {
                println!("  (なし)");
            }
            for candidate in &result.candidates {
                println!("  {:>3}  {}  [{}]", candidate.score, candidate.brand, candidate.normalized);
            }
            println!("精査結果: {}", result.classification);
        }

        Commands::Refine { input: results_path, output, desc_column, matched_column, sheet } => {
            println!("🧹 brand-match - 再精査\n");

            let table = input::read_table(&results_path, sheet.as_deref())?;
            let desc_column = desc_column.or(config.description_column.clone());
            let desc_idx = columns::resolve_column(&table.headers, desc_column.as_deref(), DESCRIPTION_GUESSES)?;
            let matched_idx = columns::resolve_column(&table.headers, Some(matched_column.as_str()), &[])?;

            let (sheet_data, classifications) = refine::refine_table(&table, desc_idx, matched_idx);
            let confident = classifications.iter().filter(|c| c.is_confident()).count();
            println!("✔ {}行を精査 (確定: {})", classifications.len(), confident);

            let output_path = output.unwrap_or_else(|| refined_output_path(&results_path));
            export::excel::write_workbook(&[sheet_data], &output_path)?;
            println!("✔ 出力: {}", output_path.display());
        }

        Commands::Config { threshold, top_n, desc_column, brand_column, id_column, show } => {
            let mut config = config;
            let mut changed = false;

            if threshold.is_some() || top_n.is_some() {
                // 保存前に範囲を検証
                config.match_settings(threshold, top_n)?;
            }
            if let Some(value) = threshold {
                config.threshold = value;
                changed = true;
            }
            if let Some(value) = top_n {
                config.top_n = value;
                changed = true;
            }
            if let Some(value) = desc_column {
                config.description_column = Some(value);
                changed = true;
            }
            if let Some(value) = brand_column {
                config.brand_column = Some(value);
                changed = true;
            }
            if let Some(value) = id_column {
                config.id_column = Some(value);
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  類似度閾値: {}", config.threshold);
                println!("  候補数: {}", config.top_n);
                println!("  説明列: {}", config.description_column.as_deref().unwrap_or("(自動)"));
                println!("  ブランド列: {}", config.brand_column.as_deref().unwrap_or("(自動)"));
                println!("  識別子列: {}", config.id_column.as_deref().unwrap_or("(なし)"));
            }
        }
    }

    Ok(())
}

fn refined_output_path(input: &Path) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("results");
    parent.join(format!("{}_refined.xlsx", stem))
}
