//! Streaming pattern censorship.
//!
//! A KMP automaton consumes chunks of symbols and re-emits them with every
//! occurrence of a fixed pattern removed, including occurrences spanning
//! chunk boundaries. Between symbols, at most `pattern_len - 1` unconfirmed
//! trailing symbols are buffered, so memory use is independent of stream
//! length. Output is pulled lazily: a consumer that stops reading halts
//! further input consumption.

/// Censor `pattern` out of a chunked symbol stream.
///
/// Returns a lazy, single-pass iterator of output chunks. Chunk boundaries
/// of the output follow the input; a final chunk flushes whatever partial
/// match is still buffered when the input ends. An empty pattern censors
/// nothing.
pub fn kmp_censor_stream<T, I>(pattern: &[T], chunks: I) -> CensorStream<T, I::IntoIter>
where
    T: Clone + Eq,
    I: IntoIterator<Item = Vec<T>>,
{
    CensorStream {
        pattern: pattern.to_vec(),
        failure: failure_function(pattern),
        state: 0,
        buffer: Vec::new(),
        chunks: chunks.into_iter(),
        flushed: false,
    }
}

/// KMP failure function: `failure[i]` is the length of the longest proper
/// prefix of `pattern[..=i]` that is also a suffix of it.
fn failure_function<T: Eq>(pattern: &[T]) -> Vec<usize> {
    let mut failure = vec![0; pattern.len()];
    let mut k = 0;
    for i in 1..pattern.len() {
        while k > 0 && pattern[i] != pattern[k] {
            k = failure[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        failure[i] = k;
    }
    failure
}

/// Iterator produced by [`kmp_censor_stream`].
#[derive(Debug, Clone)]
pub struct CensorStream<T, I> {
    pattern: Vec<T>,
    failure: Vec<usize>,
    // Length of the pattern prefix currently matched; the buffer holds
    // exactly this many unconfirmed symbols between chunks.
    state: usize,
    buffer: Vec<T>,
    chunks: I,
    flushed: bool,
}

impl<T: Clone + Eq, I> CensorStream<T, I> {
    fn feed(&mut self, chunk: Vec<T>, out: &mut Vec<T>) {
        for symbol in chunk {
            while self.state > 0 && self.pattern[self.state] != symbol {
                self.state = self.failure[self.state - 1];
            }
            if self.pattern[self.state] == symbol {
                self.state += 1;
            }
            self.buffer.push(symbol);
            if self.state == self.pattern.len() {
                // Full match: drop it and restart; the removed text cannot
                // take part in any further match.
                self.buffer.clear();
                self.state = 0;
            } else {
                // Whatever the automaton no longer needs is safe to emit.
                let confirmed = self.buffer.len() - self.state;
                out.extend(self.buffer.drain(..confirmed));
            }
        }
    }
}

impl<T: Clone + Eq, I: Iterator<Item = Vec<T>>> Iterator for CensorStream<T, I> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.pattern.is_empty() {
            return self.chunks.next();
        }
        let mut out = Vec::new();
        while out.is_empty() {
            match self.chunks.next() {
                Some(chunk) => self.feed(chunk, &mut out),
                None => {
                    // No partial match can complete without further input;
                    // flush the buffer as-is, exactly once.
                    if self.flushed {
                        return None;
                    }
                    self.flushed = true;
                    self.state = 0;
                    out.append(&mut self.buffer);
                    return if out.is_empty() { None } else { Some(out) };
                }
            }
        }
        Some(out)
    }
}
