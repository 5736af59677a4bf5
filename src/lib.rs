//! 惰性序列处理库。
//!
//! 以拉取（pull）驱动的方式在任意单遍迭代源上组合转换操作：
//! 每个中间操作仅包装上游源，返回一个新的惰性序列，元素在终端操作
//! 消费时才逐个计算，不物化任何中间结果，因此源可以是无界的。
//!
//! ```
//! use rseq::Seq;
//!
//! let output = Seq::of(vec![0, 1, 2, 3]).map(|i| i + 1).filter(|i| i % 2 == 0).to_vec();
//! assert_eq!(output, vec![2, 4]);
//! ```
//!
//! 所有方法按值消费序列，同一个序列实例无法被两个下游同时消费，
//! 单消费者约束由所有权系统保证，而非运行时检查。

mod err;
mod op;
mod seq;
mod source;

pub use err::SeqErr;
pub use seq::Seq;

/// 整数类型
pub type Integer = i64;

/// 序列构造结果
pub type SeqRes<T> = Result<Seq<T>, SeqErr>;
