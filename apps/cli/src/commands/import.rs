//! 描述文件导入命令

use anyhow::{Context, Result};
use armdeck_sdk::prelude::*;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// 导入参数
#[derive(Args, Debug)]
pub struct ImportCommand {
    /// URDF 文件路径
    pub file: PathBuf,
}

impl ImportCommand {
    pub fn execute<T: Transport>(&self, console: &mut RobotConsole<T>) -> Result<()> {
        let content = fs::read_to_string(&self.file)
            .with_context(|| format!("读取文件失败: {}", self.file.display()))?;
        let file_name = self
            .file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.display().to_string());

        let id = console.import_descriptor(&file_name, &content)?;
        if let Some(config) = console.store().find_config(&id) {
            println!("✅ 已导入 {} [{}]", config, id);
        }
        Ok(())
    }
}
