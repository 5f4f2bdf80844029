pub mod csv;
pub mod excel;

use crate::config::OutputFiles;
use crate::error::Result;
use divi_catalog_common::export::{
    detail_table, overview_table, render_html, summary_table, HtmlOptions, OverviewVariant,
};
use divi_catalog_common::Catalog;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// 出力オプション
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// 一覧表のExcel版も出力
    pub xlsx: bool,
    /// カタログのJSONも出力
    pub json: bool,
    pub html: HtmlOptions,
}

/// メモリ上で生成済みの出力
#[derive(Debug, Clone)]
pub struct Artifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// 書き込んだファイル
#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub size: usize,
    pub sha256: String,
}

/// 全出力をメモリ上で生成
///
/// 1つでも失敗した場合はファイルを書き込む前にエラーを返す。
pub fn render_artifacts(
    catalog: &Catalog,
    files: &OutputFiles,
    options: &ExportOptions,
) -> Result<Vec<Artifact>> {
    let overview = overview_table(catalog, OverviewVariant::Plain);

    let mut artifacts = vec![
        Artifact {
            file_name: files.overview.clone(),
            bytes: csv::table_to_csv(&overview)?,
        },
        Artifact {
            file_name: files.overview_with_urls.clone(),
            bytes: csv::table_to_csv(&overview_table(catalog, OverviewVariant::WithUrl))?,
        },
        Artifact {
            file_name: files.summary.clone(),
            bytes: csv::table_to_csv(&summary_table(catalog))?,
        },
        Artifact {
            file_name: files.detail.clone(),
            bytes: csv::table_to_csv(&detail_table(catalog))?,
        },
        Artifact {
            file_name: files.html.clone(),
            bytes: render_html(catalog, &options.html).into_bytes(),
        },
    ];

    if options.xlsx {
        artifacts.push(Artifact {
            file_name: files.xlsx.clone(),
            bytes: excel::table_to_xlsx(&overview)?,
        });
    }

    if options.json {
        artifacts.push(Artifact {
            file_name: files.json.clone(),
            bytes: serde_json::to_vec_pretty(catalog)?,
        });
    }

    Ok(artifacts)
}

fn staging_path(output_dir: &Path, file_name: &str) -> PathBuf {
    output_dir.join(format!(".{}.tmp", file_name))
}

fn remove_staged(staged: &[PathBuf]) {
    for path in staged {
        if let Err(e) = std::fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "staged file not removed");
        }
    }
}

/// 出力をディレクトリに書き込む（既存ファイルは上書き）
///
/// 全ファイルを一時名で書き込んでから本来の名前に変更する。
/// 一時ファイルの書き込みに失敗した場合は既存の出力に触れずにエラーを返す。
/// 名前変更の途中で失敗した場合は、それまでに変更したファイルだけが更新される。
pub fn write_artifacts(artifacts: &[Artifact], output_dir: &Path) -> Result<Vec<WrittenFile>> {
    std::fs::create_dir_all(output_dir)?;

    let mut staged = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let tmp = staging_path(output_dir, &artifact.file_name);
        if let Err(e) = std::fs::write(&tmp, &artifact.bytes) {
            remove_staged(&staged);
            return Err(e.into());
        }
        staged.push(tmp);
    }

    let mut written = Vec::with_capacity(artifacts.len());
    for (index, (artifact, tmp)) in artifacts.iter().zip(&staged).enumerate() {
        let path = output_dir.join(&artifact.file_name);
        if let Err(e) = std::fs::rename(tmp, &path) {
            remove_staged(&staged[index..]);
            return Err(e.into());
        }
        tracing::debug!(path = %path.display(), bytes = artifact.bytes.len(), "artifact written");

        written.push(WrittenFile {
            path,
            size: artifact.bytes.len(),
            sha256: hex::encode(Sha256::digest(&artifact.bytes)),
        });
    }

    Ok(written)
}

/// 生成と書き込みをまとめて実行
pub fn export_catalog(
    catalog: &Catalog,
    files: &OutputFiles,
    options: &ExportOptions,
    output_dir: &Path,
) -> Result<Vec<WrittenFile>> {
    let artifacts = render_artifacts(catalog, files, options)?;
    write_artifacts(&artifacts, output_dir)
}
