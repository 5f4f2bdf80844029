use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "divi-catalog")]
#[command(about = "Diviカタログ抽出・統合・出力生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// スクレイプCSVからDiviとカテゴリを抽出してレポート表示
    Extract {
        /// スクレイプCSVファイル
        #[arg(required = true)]
        scrape: PathBuf,

        /// 語彙にないカテゴリを拒否
        #[arg(long)]
        strict: bool,

        /// 表示するサンプル件数
        #[arg(short, long, default_value = "30")]
        samples: usize,
    },

    /// スクレイプと旧一覧表を統合して全出力を生成
    Generate {
        /// スクレイプCSVファイル
        #[arg(required = true)]
        scrape: PathBuf,

        /// 旧一覧表（CSV/XLSX）
        #[arg(required = true)]
        legacy: PathBuf,

        /// 出力ディレクトリ（デフォルト: カレントディレクトリ）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 語彙にないカテゴリを拒否
        #[arg(long)]
        strict: bool,

        /// 一覧表のExcel版も出力
        #[arg(long)]
        xlsx: bool,

        /// 統合カタログをJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を管理
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 設定ファイルのパスを表示
        #[arg(long)]
        path: bool,

        /// デフォルト設定を書き出す
        #[arg(long)]
        init: bool,
    },
}
