use crate::err::SeqErr;
use crate::seq::Seq;
use crate::{Integer, SeqRes};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::{repeat, repeat_n};

impl<T: 'static> Seq<T> {
    /// 包装任意单遍迭代源为惰性序列，固定集合（`Vec`、数组、区间等）经由
    /// `IntoIterator`适配接入。
    pub fn wrap<I>(source: I) -> Seq<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Seq { iter: Box::new(source.into_iter()) }
    }

    /// 使用直接字面值作为输入。
    pub fn of(values: Vec<T>) -> Seq<T> {
        Seq { iter: Box::new(values.into_iter()) }
    }

    /// 重复字面值作为输入，`count`未指定时重复无限次数。
    pub fn repeat(value: T, count: Option<usize>) -> Seq<T>
    where
        T: Clone,
    {
        match count {
            Some(count) => Seq { iter: Box::new(repeat_n(value, count)) },
            None => Seq { iter: Box::new(repeat(value)) },
        }
    }
}

impl Seq<Integer> {
    /// 生成指定范围内的整数作为输入。
    ///
    /// ```text
    /// start   起始值，包含。
    /// end     结束值，包含，可选，未指定时持续生成直到整数溢出。
    /// step    步长，不能为0；为正时从start递增，为负时从start递减。
    /// ```
    pub fn generate(start: Integer, end: Option<Integer>, step: Integer) -> SeqRes<Integer> {
        if step == 0 {
            return Err(SeqErr::ZeroStep);
        }
        Ok(Seq { iter: Box::new(StrideIter { next: Some(start), end, step }) })
    }
}

impl Seq<String> {
    /// 从`BufRead`源逐行读取作为输入，遇到读取错误时结束序列。
    pub fn lines(reader: impl BufRead + 'static) -> Seq<String> {
        Seq { iter: Box::new(reader.lines().map_while(Result::ok)) }
    }

    /// 从文件逐行读取作为输入，打开失败时报错，行的读取保持惰性。
    pub fn from_file(file: &str) -> SeqRes<String> {
        match File::open(file) {
            Ok(fin) => Ok(Seq::lines(BufReader::new(fin))),
            Err(err) => Err(SeqErr::OpenFileErr { file: file.to_owned(), err: err.to_string() }),
        }
    }
}

/// 按固定步长生成整数的迭代器，游标由自身维护。
#[derive(Debug, Eq, PartialEq)]
struct StrideIter {
    next: Option<Integer>,
    end: Option<Integer>,
    step: Integer,
}

impl Iterator for StrideIter {
    type Item = Integer;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if let Some(end) = self.end {
            if (self.step > 0 && current > end) || (self.step < 0 && current < end) {
                self.next = None;
                return None;
            }
        }
        // 溢出即视为耗尽
        self.next = current.checked_add(self.step);
        Some(current)
    }
}
