//! chapcode - 章节代码命令行工具
//!
//! - `chapcode display <CODE>...` - 输出显示编号
//! - `chapcode url <CODE>... [--index-name NAME]` - 输出 URL 片段或完整阅读页 URL
//! - `chapcode inspect <CODE>... [--json]` - 输出所有字段
//! - `chapcode compare <URL_A> <URL_B>` - 判断两个阅读页 URL 是否为同一章节
//! - `chapcode pages <CODE> --count N --index-name NAME` - 输出章节图片地址

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use chapcode::config::{load_config_from_path, print_config, AppConfig};
use chapcode::domain::chapter::{
    chapter_display, chapter_read_online_url, chapter_url_encode, chapters_are_equal,
    ChapterCode, PageImageLocation,
};

#[derive(Parser)]
#[command(name = "chapcode")]
#[command(about = "Decode and encode six-digit chapter codes")]
#[command(version)]
struct Cli {
    /// 配置文件路径（默认搜索 chapcode.toml / chapcode.local.toml）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the human-readable chapter number
    Display(CodesArgs),

    /// Print the URL fragment, or the full read-online URL
    Url(UrlArgs),

    /// Print every field of each code
    Inspect(InspectArgs),

    /// Check whether two chapter URLs point at the same chapter
    Compare(CompareArgs),

    /// Print the page image URLs of a chapter
    Pages(PagesArgs),
}

#[derive(Args)]
struct CodesArgs {
    /// 六位章节代码
    #[arg(required = true)]
    codes: Vec<String>,
}

#[derive(Args)]
struct UrlArgs {
    #[command(flatten)]
    codes: CodesArgs,

    /// 作品索引名，提供时输出完整 URL
    #[arg(long)]
    index_name: Option<String>,
}

#[derive(Args)]
struct InspectArgs {
    #[command(flatten)]
    codes: CodesArgs,

    /// 以 JSON 数组输出
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CompareArgs {
    first: String,
    second: String,
}

#[derive(Args)]
struct PagesArgs {
    code: String,

    /// 页数
    #[arg(long)]
    count: u32,

    /// 作品索引名
    #[arg(long)]
    index_name: String,

    /// 分季子目录
    #[arg(long, default_value = "")]
    directory: String,
}

/// inspect 输出
#[derive(Serialize)]
struct CodeReport {
    code: ChapterCode,
    season: u8,
    chapter: u16,
    decimal: u8,
    display: String,
    url_fragment: String,
}

impl From<ChapterCode> for CodeReport {
    fn from(code: ChapterCode) -> Self {
        Self {
            season: code.season_digit(),
            chapter: code.chapter_number(),
            decimal: code.decimal_digit(),
            display: code.display_number(),
            url_fragment: code.url_fragment(),
            code,
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level));

    // stdout 留给命令输出
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn parse_code(raw: &str) -> Result<ChapterCode> {
    ChapterCode::parse(raw).with_context(|| format!("Invalid chapter code: {}", raw))
}

fn display_lines(codes: &[String]) -> Result<Vec<String>> {
    codes
        .iter()
        .map(|raw| chapter_display(raw).with_context(|| format!("Cannot decode {}", raw)))
        .collect()
}

fn url_lines(
    codes: &[String],
    index_name: Option<&str>,
    base_url: &str,
) -> Result<Vec<String>> {
    codes
        .iter()
        .map(|raw| {
            let line = match index_name {
                Some(index_name) => chapter_read_online_url(base_url, index_name, raw),
                None => chapter_url_encode(raw),
            };
            line.with_context(|| format!("Cannot encode {}", raw))
        })
        .collect()
}

fn build_reports(codes: &[String]) -> Result<Vec<CodeReport>> {
    codes
        .iter()
        .map(|raw| parse_code(raw).map(CodeReport::from))
        .collect()
}

fn render_reports_json(reports: &[CodeReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// compare 的判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Equal,
    Different,
}

impl Comparison {
    fn of(first: &str, second: &str) -> Self {
        if chapters_are_equal(first, second) {
            Self::Equal
        } else {
            Self::Different
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Different => "different",
        }
    }

    fn exit_code(self) -> ExitCode {
        match self {
            Self::Equal => ExitCode::SUCCESS,
            Self::Different => ExitCode::FAILURE,
        }
    }
}

fn page_lines(args: PagesArgs, config: &AppConfig) -> Result<Vec<String>> {
    let Some(host) = config.site.image_host() else {
        bail!("site.image_host is not configured");
    };

    let code = parse_code(&args.code)?;
    let location = PageImageLocation::new(host, args.index_name, args.directory);
    Ok(location.page_urls(&code, args.count))
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let reports = build_reports(&args.codes.codes)?;

    if args.json {
        println!("{}", render_reports_json(&reports)?);
        return Ok(());
    }

    for report in &reports {
        println!(
            "{}  season={} chapter={} decimal={}  display={}  url={}",
            report.code,
            report.season,
            report.chapter,
            report.decimal,
            report.display,
            report.url_fragment
        );
    }
    Ok(())
}

fn run_compare(args: CompareArgs) -> ExitCode {
    let outcome = Comparison::of(&args.first, &args.second);
    println!("{}", outcome.label());
    outcome.exit_code()
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // 配置优先级：环境变量 > 配置文件 > 默认值
    let config = load_config_from_path(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);
    print_config(&config);

    match cli.command {
        Commands::Display(args) => print_lines(&display_lines(&args.codes)?),
        Commands::Url(args) => print_lines(&url_lines(
            &args.codes.codes,
            args.index_name.as_deref(),
            &config.site.base_url,
        )?),
        Commands::Inspect(args) => run_inspect(args)?,
        Commands::Compare(args) => return Ok(run_compare(args)),
        Commands::Pages(args) => print_lines(&page_lines(args, &config)?),
    }

    Ok(ExitCode::SUCCESS)
}
