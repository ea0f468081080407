//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use alldid_core::{AllDid, NamingService};
use alldid_services::{
    ApiServiceOptions, CreateInstanceOptions, DotbitServiceOptions, ServiceOptions,
    create_instance, create_service,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_env {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成一个几乎不可能被注册的名称
pub fn generate_unregistered_name(suffix: &str) -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("alldidtest{}.{suffix}", &uuid[..12])
}

/// 测试上下文
pub struct TestContext {
    pub service: Arc<dyn NamingService>,
    pub alldid: AllDid,
}

impl TestContext {
    fn dotbit_options() -> Option<DotbitServiceOptions> {
        let indexer_uri = env::var("DOTBIT_INDEXER_URL").ok()?;
        Some(DotbitServiceOptions::default().with_indexer_uri(indexer_uri))
    }

    /// 从环境变量创建 .bit 测试上下文
    pub fn dotbit() -> Option<Self> {
        let options = Self::dotbit_options()?;
        let service = create_service(ServiceOptions::Dotbit(options.clone())).ok()?;
        let alldid = create_instance(CreateInstanceOptions { dotbit: options }).ok()?;
        Some(Self { service, alldid })
    }

    /// 从环境变量创建 .bit extension 测试上下文
    pub fn dotbit_extension() -> Option<Self> {
        let options = Self::dotbit_options()?;
        let service = create_service(ServiceOptions::DotbitExtension(options.clone())).ok()?;
        let alldid = create_instance(CreateInstanceOptions { dotbit: options }).ok()?;
        Some(Self { service, alldid })
    }

    /// 从环境变量创建 API 测试上下文
    pub fn api() -> Option<Self> {
        let base_uri = env::var("ALLDID_API_URL").ok()?;
        let mut options = ApiServiceOptions::new(base_uri);
        if let Ok(network) = env::var("ALLDID_API_NETWORK") {
            options = options.with_network(network);
        }
        let service = create_service(ServiceOptions::Api(options.clone())).ok()?;
        let alldid = alldid_services::create_lite_instance(options).ok()?;
        Some(Self { service, alldid })
    }
}
