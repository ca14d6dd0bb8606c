//! 程序入口：初始化日志、解析命令行，并调用文本/JSON翻译节点

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use json_fanyi::config::{SelectorPolicy, TranslateConfig};
use json_fanyi::model::selector::{Script, DEFAULT_TITLE_KEY};
use json_fanyi::node::{DEFAULT_TEXT_SOURCE, DEFAULT_TEXT_TARGET};
use json_fanyi::translate::languages::{source_language_options, target_language_options};
use json_fanyi::translate::{GoogleTranslator, Translator, AUTO_LANG};
use json_fanyi::utils::clipboard::copy_to_clipboard;
use json_fanyi::{JsonTranslateNode, TextTranslateNode};

#[derive(Parser)]
#[command(name = "json_fanyi", version, about = "Translate text or the string leaves of a JSON file")]
struct Cli {
    /// JSON 配置文件
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 翻译单条文本
    Text {
        text: String,
        #[arg(long, default_value = DEFAULT_TEXT_SOURCE)]
        src: String,
        #[arg(long, default_value = DEFAULT_TEXT_TARGET)]
        dest: String,
        /// 同时复制到剪贴板
        #[arg(long)]
        copy: bool,
    },
    /// 翻译 JSON 文件，输出 `{主干}-{目标语言}.json`
    Json {
        input: PathBuf,
        #[arg(long, default_value = AUTO_LANG)]
        source_lang: String,
        /// 目标语言；`none` 表示原样输出
        #[arg(long, default_value = DEFAULT_TEXT_TARGET)]
        target_lang: String,
        /// 紧凑输出（默认缩进）
        #[arg(long)]
        compact: bool,
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
        /// key 策略的哨兵键名
        #[arg(long)]
        key: Option<String>,
        /// script 策略的文字区段
        #[arg(long, value_enum)]
        script: Option<ScriptArg>,
        #[arg(long)]
        concurrency: Option<usize>,
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
    /// 列出可选语言代码
    Languages {
        /// 列出目标语言（含 none）
        #[arg(long)]
        target: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Key,
    Script,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScriptArg {
    Cjk,
    Kana,
    Hangul,
    Cyrillic,
}

impl From<ScriptArg> for Script {
    fn from(arg: ScriptArg) -> Self {
        match arg {
            ScriptArg::Cjk => Script::Cjk,
            ScriptArg::Kana => Script::Kana,
            ScriptArg::Hangul => Script::Hangul,
            ScriptArg::Cyrillic => Script::Cyrillic,
        }
    }
}

/// 命令行参数覆盖配置文件中的选择策略
fn resolve_selector(
    current: &SelectorPolicy,
    policy: Option<PolicyArg>,
    key: Option<String>,
    script: Option<ScriptArg>,
) -> SelectorPolicy {
    let current_key = match current {
        SelectorPolicy::Key { key } => key.clone(),
        SelectorPolicy::Script { .. } => DEFAULT_TITLE_KEY.to_string(),
    };
    let current_script = match current {
        SelectorPolicy::Script { script } => *script,
        SelectorPolicy::Key { .. } => Script::default(),
    };
    match (policy, key, script) {
        (Some(PolicyArg::Key), key, _) => SelectorPolicy::Key {
            key: key.unwrap_or(current_key),
        },
        (Some(PolicyArg::Script), _, script) => SelectorPolicy::Script {
            script: script.map(Script::from).unwrap_or(current_script),
        },
        (None, Some(key), _) => SelectorPolicy::Key { key },
        (None, None, Some(script)) => SelectorPolicy::Script { script: script.into() },
        (None, None, None) => current.clone(),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_translator(config: &TranslateConfig) -> anyhow::Result<Arc<dyn Translator>> {
    let google = GoogleTranslator::new(config.endpoint.clone(), config.call_timeout())
        .context("初始化翻译后端失败")?;
    Ok(Arc::new(google))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(p) => TranslateConfig::load(p).with_context(|| format!("加载配置失败: {}", p.display()))?,
        None => TranslateConfig::default(),
    };

    match cli.command {
        Command::Text { text, src, dest, copy } => {
            let node = TextTranslateNode::new(build_translator(&config)?).with_call_timeout(config.call_timeout());
            let translated = node.translate_text(&text, &src, &dest).await;
            println!("{}", translated);
            if copy {
                if let Err(e) = copy_to_clipboard(&translated) {
                    tracing::warn!("复制到剪贴板失败: {}", e);
                }
            }
        }
        Command::Json {
            input,
            source_lang,
            target_lang,
            compact,
            policy,
            key,
            script,
            concurrency,
            timeout_secs,
        } => {
            config.selector = resolve_selector(&config.selector, policy, key, script);
            if let Some(n) = concurrency {
                config.concurrency = n;
            }
            if let Some(secs) = timeout_secs {
                config.call_timeout_secs = secs;
            }
            config.validate()?;

            let node = JsonTranslateNode::from_config(build_translator(&config)?, &config);
            match node.translate_json_file(&input, &source_lang, &target_lang, !compact).await {
                Some(output) => println!("{}", output.display()),
                None => bail!("JSON翻译失败: {}", input.display()),
            }
        }
        Command::Languages { target } => {
            let options = if target {
                target_language_options()
            } else {
                source_language_options()
            };
            for code in options {
                println!("{}", code);
            }
        }
    }
    Ok(())
}
