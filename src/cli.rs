use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "caronline")]
#[command(about = "CarOnline 車両リスティング管理ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力（リクエストURL等）
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 車両一覧を表示（既定は先頭6件）
    List {
        /// 全件表示
        #[arg(short, long)]
        all: bool,
    },

    /// IDで車両を検索
    Get {
        #[arg(required = true)]
        id: String,
    },

    /// 車両を作成
    Create {
        /// ブランド
        #[arg(long)]
        marca: String,

        /// 走行距離
        #[arg(long)]
        kilometraje: String,

        /// 価格（GTQ）
        #[arg(long)]
        precio: String,
    },

    /// 車両を更新
    Update {
        #[arg(required = true)]
        id: i64,

        #[arg(long)]
        marca: String,

        #[arg(long, default_value = "")]
        kilometraje: String,

        #[arg(long)]
        precio: String,
    },

    /// 車両を削除
    Delete {
        #[arg(required = true)]
        id: i64,

        /// 確認をスキップ
        #[arg(short, long)]
        yes: bool,
    },

    /// 画像をアップロードして車両を解析
    Analyze {
        /// 画像ファイル
        #[arg(required = true)]
        image: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// APIオリジンを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 自己署名証明書の許可/不許可
        #[arg(long)]
        accept_invalid_certs: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_all() {
        let cli = Cli::try_parse_from(["caronline", "list", "--all"]).unwrap();
        assert!(matches!(cli.command, Commands::List { all: true }));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from([
            "caronline", "-v", "create", "--marca", "Mazda", "--kilometraje", "140000", "--precio", "25000",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Create { marca, kilometraje, precio } => {
                assert_eq!(marca, "Mazda");
                assert_eq!(kilometraje, "140000");
                assert_eq!(precio, "25000");
            }
            _ => panic!("Expected Create"),
        }
    }

    #[test]
    fn test_parse_delete_requires_numeric_id() {
        assert!(Cli::try_parse_from(["caronline", "delete", "abc"]).is_err());
        let cli = Cli::try_parse_from(["caronline", "delete", "7", "--yes"]).unwrap();
        assert!(matches!(cli.command, Commands::Delete { id: 7, yes: true }));
    }

    #[test]
    fn test_parse_update_default_mileage() {
        let cli = Cli::try_parse_from(["caronline", "update", "3", "--marca", "Kia", "--precio", "10"]).unwrap();
        match cli.command {
            Commands::Update { id, kilometraje, .. } => {
                assert_eq!(id, 3);
                assert_eq!(kilometraje, "");
            }
            _ => panic!("Expected Update"),
        }
    }
}
