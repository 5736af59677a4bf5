pub(crate) mod intersperse;

/// 有界拉取迭代器，最多产出源的前`count`个元素。
///
/// 剩余计数由自身维护，不依赖源提供长度等额外能力，对无界源同样有效。
pub(crate) struct Taken<I> {
    source: I,
    remaining: usize,
}

impl<I> Taken<I> {
    pub(crate) fn new(source: I, count: usize) -> Taken<I> {
        Taken { source, remaining: count }
    }
}

impl<I: Iterator> Iterator for Taken<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            // 计数为0时不触碰源
            return None;
        }
        match self.source.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                // 源提前耗尽，清零计数，后续拉取不再访问源
                self.remaining = 0;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 被拉取即panic的源，用于断言某个操作没有访问源。
    struct PullBomb;

    impl Iterator for PullBomb {
        type Item = i32;

        fn next(&mut self) -> Option<Self::Item> {
            panic!("source must not be pulled");
        }
    }

    /// 产出一个元素后耗尽，耗尽后再次被拉取即panic的源。
    struct FragileSource {
        pulls: usize,
    }

    impl Iterator for FragileSource {
        type Item = i32;

        fn next(&mut self) -> Option<Self::Item> {
            self.pulls += 1;
            match self.pulls {
                1 => Some(1),
                2 => None,
                _ => panic!("source pulled after exhaustion"),
            }
        }
    }

    #[test]
    fn test_taken_basic() {
        assert_eq!(Taken::new(0..10, 3).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_taken_zero_must_not_pull_source() {
        let mut taken = Taken::new(PullBomb, 0);
        assert_eq!(taken.next(), None);
        assert_eq!(taken.next(), None);
    }

    #[test]
    fn test_taken_exhausts_early_on_short_source() {
        let mut taken = Taken::new(vec![1].into_iter(), 3);
        assert_eq!(taken.next(), Some(1));
        assert_eq!(taken.next(), None);
        assert_eq!(taken.next(), None);
    }

    #[test]
    fn test_taken_stops_pulling_after_source_exhaustion() {
        let mut taken = Taken::new(FragileSource { pulls: 0 }, 5);
        assert_eq!(taken.next(), Some(1));
        assert_eq!(taken.next(), None);
        assert_eq!(taken.next(), None);
    }

    #[test]
    fn test_taken_over_unbounded_source() {
        assert_eq!(Taken::new(0.., 5).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }
}
