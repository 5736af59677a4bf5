use std::iter::Peekable;

/// 间隔器的当前相位：下一次拉取产出分隔值还是源元素。
#[derive(Debug, Eq, PartialEq)]
enum Phase {
    Separator,
    Element,
}

/// 在相邻源元素之间插入分隔值的迭代器，以分隔值开头。
///
/// 每次产出分隔值之前都先确认源还有下一个元素（单元素前瞻），
/// 因此空源不会产出前导分隔值，源耗尽时也不会残留尾部分隔值。
pub(crate) struct Intersperse<I: Iterator> {
    source: Peekable<I>,
    separator: I::Item,
    phase: Phase,
}

impl<I: Iterator> Intersperse<I> {
    pub(crate) fn new(source: I, separator: I::Item) -> Intersperse<I> {
        Intersperse { source: source.peekable(), separator, phase: Phase::Separator }
    }
}

impl<I> Iterator for Intersperse<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Separator => {
                // 先确认源有下一个元素，再产出分隔值
                self.source.peek()?;
                self.phase = Phase::Element;
                Some(self.separator.clone())
            }
            Phase::Element => {
                // 进入本相位时源必有元素，产出后回到分隔相位
                self.phase = Phase::Separator;
                self.source.next()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersperse_basic() {
        let output = Intersperse::new(vec!['a', 'b', 'c'].into_iter(), 's').collect::<Vec<_>>();
        assert_eq!(output, vec!['s', 'a', 's', 'b', 's', 'c']);
    }

    #[test]
    fn test_intersperse_empty_source_emits_nothing() {
        let mut interspersed = Intersperse::new(std::iter::empty::<i32>(), 10);
        assert_eq!(interspersed.next(), None);
        assert_eq!(interspersed.next(), None);
    }

    #[test]
    fn test_intersperse_single_item() {
        let output = Intersperse::new(vec![7].into_iter(), 10).collect::<Vec<_>>();
        assert_eq!(output, vec![10, 7]);
    }

    #[test]
    fn test_intersperse_never_emits_trailing_separator() {
        let mut interspersed = Intersperse::new(vec![1, 2].into_iter(), 0);
        assert_eq!(interspersed.next(), Some(0));
        assert_eq!(interspersed.next(), Some(1));
        assert_eq!(interspersed.next(), Some(0));
        assert_eq!(interspersed.next(), Some(2));
        // 源恰好在上一个元素之后耗尽，不得再产出分隔值
        assert_eq!(interspersed.next(), None);
        assert_eq!(interspersed.next(), None);
    }

    #[test]
    fn test_intersperse_over_unbounded_source() {
        let output = Intersperse::new(std::iter::repeat(1), 0).take(5).collect::<Vec<_>>();
        assert_eq!(output, vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_intersperse_strings() {
        let source = vec!["a".to_string(), "b".to_string()].into_iter();
        let output = Intersperse::new(source, ", ".to_string()).collect::<Vec<_>>();
        assert_eq!(output, vec![", ", "a", ", ", "b"]);
    }
}
