use clap::builder::BoolishValueParser;
use clap::Parser;
use std::path::PathBuf;

/// Activity Signup - 课外活动报名服务
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// 监听端口
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// 监听地址
    #[arg(short = 'a', long, env = "ADDRESS", default_value = "0.0.0.0")]
    pub address: String,

    /// 挂载到 /static 的静态文件目录
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// 初始活动数据（JSON），不指定时使用内置数据
    #[arg(long, env = "SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// 报名时检查 max_participants（环境变量接受 1/0、yes/no、true/false）
    #[arg(long, env = "ENFORCE_CAPACITY", value_parser = BoolishValueParser::new())]
    pub enforce_capacity: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    // 环境变量是进程级的，所有读写 ENFORCE_CAPACITY 的断言放在同一个测试里
    #[test]
    fn defaults_and_capacity_env() {
        std::env::remove_var("ENFORCE_CAPACITY");
        let args = CommandArgs::try_parse_from(["activity-signup"]).unwrap();
        assert_eq!(args.port, 8000);
        assert_eq!(args.address, "0.0.0.0");
        assert_eq!(args.static_dir, PathBuf::from("static"));
        assert!(args.seed_file.is_none());
        assert!(!args.enforce_capacity);

        for (value, expected) in [
            ("1", true),
            ("yes", true),
            ("true", true),
            ("0", false),
            ("no", false),
            ("false", false),
        ] {
            std::env::set_var("ENFORCE_CAPACITY", value);
            let args = CommandArgs::try_parse_from(["activity-signup"])
                .unwrap_or_else(|e| panic!("ENFORCE_CAPACITY={}: {}", value, e));
            assert_eq!(args.enforce_capacity, expected, "ENFORCE_CAPACITY={}", value);
        }
        std::env::remove_var("ENFORCE_CAPACITY");
    }

    #[test]
    fn overrides() {
        let args = CommandArgs::try_parse_from([
            "activity-signup",
            "-p",
            "9000",
            "--seed-file",
            "seed.json",
            "--enforce-capacity",
        ])
        .unwrap();
        assert_eq!(args.port, 9000);
        assert_eq!(args.seed_file, Some(PathBuf::from("seed.json")));
        assert!(args.enforce_capacity);
    }
}
