use crate::op::Taken;
use crate::op::intersperse::Intersperse;
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// 惰性序列，包装一个单遍迭代源。
///
/// 中间操作（[`map`](Seq::map)、[`filter`](Seq::filter)、[`take`](Seq::take)、
/// [`intersperse`](Seq::intersperse)等）只包装源并立即返回，不拉取任何元素；
/// 终端操作（[`reduce`](Seq::reduce)、[`each`](Seq::each)、[`to_vec`](Seq::to_vec)等）
/// 才逐个向上游请求元素，因此任意长度（包括无界）的源都只占用常量内存。
///
/// 所有操作按值消费`self`：一个序列实例只能被一个下游消费一次，
/// 源的单遍性由所有权系统保证。
pub struct Seq<T> {
    pub(crate) iter: Box<dyn Iterator<Item = T>>,
}

impl<T> std::fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seq").finish_non_exhaustive()
    }
}

impl<T> Iterator for Seq<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

impl<T: 'static> Seq<T> {
    /* **************************************** 中间操作 **************************************** */

    /// 对每个元素应用函数，返回新的惰性序列。
    ///
    /// 每个被拉取的元素恰好应用一次`mapper`，按拉取顺序执行；
    /// `mapper`发生panic时在触发它的那次拉取处向外传播，
    /// 之前的元素已完整处理，之后的元素不会被计算。
    pub fn map<U: 'static>(self, mapper: impl FnMut(T) -> U + 'static) -> Seq<U> {
        Seq { iter: Box::new(self.iter.map(mapper)) }
    }

    /// 保留满足条件的元素，返回新的惰性序列。
    ///
    /// 每个源元素恰好判定一次，顺序不变。注意：当长段元素均不满足条件时，
    /// 对过滤后序列的一次拉取可能在内部拉取源任意多个元素，这是过滤固有的行为。
    pub fn filter(self, pred: impl FnMut(&T) -> bool + 'static) -> Seq<T> {
        Seq { iter: Box::new(self.iter.filter(pred)) }
    }

    /// 观察流经的每个元素，不改变序列内容。
    pub fn inspect(self, f: impl FnMut(&T) + 'static) -> Seq<T> {
        Seq { iter: Box::new(self.iter.inspect(f)) }
    }

    /// 保留前`count`个元素，丢弃后续的其他元素。
    ///
    /// 计数由本序列自身维护，不依赖源的任何额外能力，因此对无界源同样有效。
    /// `count`为0时不会拉取源；源提前耗尽时序列随之耗尽，不视为错误。
    pub fn take(self, count: usize) -> Seq<T> {
        Seq { iter: Box::new(Taken::new(self.iter, count)) }
    }

    /// 仅保留首个元素，等价于`take(1)`。
    pub fn head(self) -> Seq<T> {
        self.take(1)
    }

    /// 丢弃前`count`个元素，保留后续的其他元素。
    pub fn skip(self, count: usize) -> Seq<T> {
        Seq { iter: Box::new(self.iter.skip(count)) }
    }

    /// 持续保留元素，直到条件首次不满足。
    pub fn take_while(self, pred: impl FnMut(&T) -> bool + 'static) -> Seq<T> {
        Seq { iter: Box::new(self.iter.take_while(pred)) }
    }

    /// 持续丢弃元素，直到条件首次不满足。
    pub fn skip_while(self, pred: impl FnMut(&T) -> bool + 'static) -> Seq<T> {
        Seq { iter: Box::new(self.iter.skip_while(pred)) }
    }

    /// 在相邻元素之间插入分隔值，以分隔值开头。
    ///
    /// 源为`[a, b, c]`时产出`[sep, a, sep, b, sep, c]`；源为空时产出空序列，
    /// 不会出现只有分隔值而无后续元素的情况。
    pub fn intersperse(self, separator: T) -> Seq<T>
    where
        T: Clone,
    {
        Seq { iter: Box::new(Intersperse::new(self.iter, separator)) }
    }

    /// 去重，保留首次出现的元素，顺序不变，惰性执行。
    pub fn unique(self) -> Seq<T>
    where
        T: Eq + Hash + Clone,
    {
        let mut seen = FxHashSet::default();
        self.filter(move |item| seen.insert(item.clone()))
    }

    /* **************************************** 终端操作 **************************************** */

    /// 按序拉取全部元素，逐个并入累计值，返回最终累计结果。
    ///
    /// `accumulator`的参数顺序为（元素，当前累计值）。
    /// 源为无界序列时本方法不会返回，消费前应先以[`take`](Seq::take)截断。
    pub fn reduce<A>(self, mut accumulator: impl FnMut(T, A) -> A, initial: A) -> A {
        let mut accumulation = initial;
        for item in self.iter {
            accumulation = accumulator(item, accumulation);
        }
        accumulation
    }

    /// 按序拉取全部元素并对每个元素执行`f`，丢弃返回值。
    ///
    /// 源为无界序列时本方法不会返回。
    pub fn each(self, mut f: impl FnMut(T)) {
        for item in self.iter {
            f(item);
        }
    }

    /// 拉取全部元素收集为`Vec`。
    ///
    /// 仅适用于有限序列，对无界源调用前必须先以[`take`](Seq::take)截断。
    pub fn to_vec(self) -> Vec<T> {
        self.iter.collect()
    }

    /// 统计元素数量。
    pub fn count(self) -> usize {
        self.iter.count()
    }
}
