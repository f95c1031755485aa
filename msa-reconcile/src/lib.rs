//! # msa-reconcile
//!
//! 把局部比对模型（如 DEDAL）输出的比对报告修复为完整长度、等长的蛋白序列对，
//! 供下游 MSA 格式（MSF / FASTA / JSON）使用。
//!
//! 流程分三步：
//!
//! - **报告解析**：从三行报告块中读取两条序列的 `(start, 带间隙片段, end)`
//! - **两侧恢复**：把局部比对丢掉的前缀、后缀残基拼回对齐区域两侧
//! - **两阶段填充**：先按对齐起点补齐前端，再补齐末尾，使两条序列等长
//!
//! ## 快速示例
//!
//! ```rust
//! use msa_reconcile::reconcile::reconcile;
//!
//! let report = "2 AC-DE 6\n|| ||\n0 ACGDE 4\n";
//! let pair = reconcile(report, b"XYACBDEFG", b"ACGDEKL").unwrap();
//! assert_eq!(pair.first(), b"XYAC.DEFG");
//! assert_eq!(pair.second(), b"..ACGDEKL");
//! ```
//!
//! ## 模块说明
//!
//! - [`io`] — FASTA 读取、比对报告解析、MSF / FASTA / JSON 输出
//! - [`reconcile`] — 两侧恢复与填充
//! - [`batch`] — 文件级流程与并行批量处理
//! - [`util`] — 间隙 / 填充字符约定
//! - [`error`] — 错误类型

pub mod batch;
pub mod error;
pub mod io;
pub mod reconcile;
pub mod util;

pub use error::ReconcileError;
