//! 配置文件加载

use crate::error::AppError;
use circseg_ui::EngineConfig;
use std::path::Path;
use tracing::info;

/// 从 JSON 解析配置，缺省字段使用默认值
pub fn parse(json: &str) -> Result<EngineConfig, AppError> {
    let config: EngineConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// 加载配置文件，未指定时使用默认配置
pub fn load(path: Option<&Path>) -> Result<EngineConfig, AppError> {
    match path {
        Some(path) => {
            let config = parse(&std::fs::read_to_string(path)?)?;
            info!("Loaded config from: {}", path.display());
            Ok(config)
        }
        None => Ok(EngineConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circseg_core::intersection::DiscriminantTest;

    #[test]
    fn test_partial_config() {
        let config = parse(r#"{ "solver": { "discriminant": { "mode": "tolerant", "epsilon": 1e-9 } } }"#)
            .unwrap();
        assert_eq!(
            config.solver.discriminant,
            DiscriminantTest::Tolerant { epsilon: 1e-9 }
        );
        assert_eq!(config.circle_segments, 100);
        assert_eq!(config.viewport.width, 700.0);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            parse(r#"{ "circle_segments": 1 }"#),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            parse(r#"{ "viewport": { "width": 0, "height": 10 } }"#),
            Err(AppError::Config(_))
        ));
        assert!(matches!(parse("not json"), Err(AppError::Json(_))));
    }
}
