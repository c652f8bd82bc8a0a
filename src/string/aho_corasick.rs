#[derive(Clone)]
struct State<const ALPHABET: usize> {
    next: [usize; ALPHABET],
    fail: usize,
    count: usize, // patterns ending here, after build also the ones ending at a failure ancestor
}

impl<const ALPHABET: usize> State<ALPHABET> {
    fn new() -> Self {
        Self { next: [usize::MAX; ALPHABET], fail: usize::MAX, count: 0 }
    }
}

/// Aho-Corasick automaton over the symbols `base, base + 1, ..., base + ALPHABET - 1`.
///
/// Insert every pattern, then call `build` once before querying.
pub struct AhoCorasick<const ALPHABET: usize> {
    base: u8,
    states: Vec<State<ALPHABET>>,
    bfs_order: Vec<usize>,
}

impl<const ALPHABET: usize> AhoCorasick<ALPHABET> {
    pub fn new(base: u8) -> Self {
        Self { base, states: vec![State::new()], bfs_order: Vec::new() }
    }

    #[inline]
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    #[inline]
    fn symbol(&self, ch: u8) -> usize {
        let c = ch.wrapping_sub(self.base) as usize;
        assert!(c < ALPHABET, "symbol {ch} is outside the alphabet");
        c
    }

    // returns the state that spells the pattern
    pub fn insert(&mut self, pattern: &[u8]) -> usize {
        assert!(self.bfs_order.is_empty(), "insert after build");
        let mut now = 0;
        for &ch in pattern {
            let c = self.symbol(ch);
            if self.states[now].next[c] == usize::MAX {
                self.states.push(State::new());
                self.states[now].next[c] = self.states.len() - 1;
            }
            now = self.states[now].next[c];
        }
        self.states[now].count += 1;
        now
    }

    // failure links in BFS order; missing transitions are completed through the failure link
    pub fn build(&mut self) {
        self.bfs_order = vec![0];
        let mut i = 0;
        while i < self.bfs_order.len() {
            let now = self.bfs_order[i];
            i += 1;

            let fail = self.states[now].fail;
            for c in 0..ALPHABET {
                let fallback = if fail == usize::MAX { 0 } else { self.states[fail].next[c] };
                let v = self.states[now].next[c];
                if v == usize::MAX {
                    self.states[now].next[c] = fallback;
                } else {
                    self.states[v].fail = fallback;
                    self.bfs_order.push(v);
                }
            }

            if fail != usize::MAX {
                self.states[now].count += self.states[fail].count;
            }
        }
    }

    /// Number of inserted patterns (with multiplicity) that are suffixes of the string of `state`.
    pub fn pattern_count(&self, state: usize) -> usize {
        self.states[state].count
    }

    /// For every state, the number of occurrences of its string in `text`.
    pub fn query(&self, text: &[u8]) -> Vec<usize> {
        assert!(!self.bfs_order.is_empty(), "query before build");
        let mut occurrences = vec![0; self.states.len()];
        let mut now = 0;
        for &ch in text {
            now = self.states[now].next[self.symbol(ch)];
            occurrences[now] += 1;
        }

        // deeper states first, so each count is final before it reaches its failure link
        for &u in self.bfs_order.iter().rev() {
            let fail = self.states[u].fail;
            if fail != usize::MAX {
                occurrences[fail] += occurrences[u];
            }
        }
        occurrences
    }
}
