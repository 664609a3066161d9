//! 宽松的十进制计数解析
//!
//! 行为与内核的 `sscanf(buf, "%ld %ld", ...)` 相同：跳过前导空白，允许一个
//! `+` 或 `-`，读到第一个非数字字符为止；两个数之间可以是任意空白，之后的
//! 内容被忽略。遇到 NUL 视为字符串结束。
//!
//! 数值按 `simple_strtol` 的方式累加，溢出时回绕而不报错；结果存进
//! `unsigned long` 计数器，所以 `-1` 读出来是 `u64::MAX`。

/// 从 `input` 解析两个计数
///
/// 只有不足两次转换时返回 `None`。
///
/// # Examples
///
/// ```rust
/// use sink_net::util::scan_two_counts;
///
/// assert_eq!(scan_two_counts(b"3 350\n"), Some((3, 350)));
/// assert_eq!(scan_two_counts(b"-1 5"), Some((u64::MAX, 5)));
/// assert_eq!(scan_two_counts(b"abc"), None);
/// ```
pub fn scan_two_counts(input: &[u8]) -> Option<(u64, u64)> {
    let end = input.iter().position(|&b| b == 0).unwrap_or(input.len());
    let mut scanner = Scanner {
        buf: &input[..end],
        pos: 0,
    };

    let packets = scanner.next_count()?;
    let bytes = scanner.next_count()?;
    Some((packets, bytes))
}

struct Scanner<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl Scanner<'_> {
    fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    fn next_count(&mut self) -> Option<u64> {
        // C 的 isspace 还包括 \v
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')) {
            self.pos += 1;
        }

        let negative = match self.peek() {
            Some(b'+') => {
                self.pos += 1;
                false
            }
            Some(b'-') => {
                self.pos += 1;
                true
            }
            _ => false,
        };

        let start = self.pos;
        let mut value: u64 = 0;
        while let Some(c @ b'0'..=b'9') = self.peek() {
            value = value.wrapping_mul(10).wrapping_add(u64::from(c - b'0'));
            self.pos += 1;
        }

        if self.pos == start {
            return None;
        }
        // (long)-x 再存入 unsigned long
        Some(if negative { value.wrapping_neg() } else { value })
    }
}
