// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

use crate::freq::DEFAULT_LIMIT;

/// Lenient `--limit` parser: values that do not parse as a positive
/// integer fall back to the default instead of failing the invocation.
fn parse_limit(s: &str) -> Result<usize, String> {
    match s.parse::<i64>() {
        Ok(n) if n > 0 => Ok(n as usize),
        _ => {
            log::warn!("ignoring --limit value '{s}', using default {DEFAULT_LIMIT}");
            Ok(DEFAULT_LIMIT)
        }
    }
}

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "wc",
    version = crate::VERSION,
    about = "単語数/行数/文字数の計測ツール (言語判定・頻度分析・scc 連携)"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 単語数を数える
    #[arg(short = 'w', long)]
    pub words: bool,

    /// 行数を数える
    #[arg(short = 'l', long)]
    pub lines: bool,

    /// 文字数 (Unicode コードポイント) を数える
    #[arg(short = 'c', long)]
    pub chars: bool,

    /// 指定パスのコード行数を数える (scc が必要)
    #[arg(long)]
    pub loc: bool,

    /// 入力テキストの自然言語を判定する
    #[arg(long)]
    pub lang: bool,

    /// --lang と同様、ただしタグではなく言語名を表示する
    #[arg(long)]
    pub lang_name: bool,

    /// 単語の出現頻度を表示する
    #[arg(long)]
    pub freq: bool,

    /// 頻度をアルファベット順ではなく出現数の降順で並べる
    #[arg(long)]
    pub sort_count: bool,

    /// 頻度表示の最大件数 (値の省略・不正な値は既定値 10 に補正)
    #[arg(
        long,
        value_name = "N",
        value_parser = parse_limit,
        num_args = 0..=1,
        default_missing_value = "10",
        allow_negative_numbers = true
    )]
    pub limit: Option<usize>,

    /// 入力ファイル (省略時は標準入力、--loc ではディレクトリ)
    pub paths: Vec<PathBuf>,
}

/// Parse the process arguments. Usage text goes to stderr with exit
/// status 0, bypassing all other processing.
pub fn parse() -> Args {
    match Args::try_parse_from(std::env::args_os()) {
        Ok(args) => args,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            eprint!("{err}");
            std::process::exit(0);
        }
        Err(err) => err.exit(),
    }
}
