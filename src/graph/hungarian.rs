use num_traits::{Bounded, NumAssign};

// walk the alternating path back from the free right vertex j
fn augment(mut j: usize, predecessor: &[usize], left_match: &mut [usize], right_match: &mut [usize]) {
    while j != usize::MAX {
        let i = predecessor[j];
        right_match[j] = i;
        std::mem::swap(&mut left_match[i], &mut j);
    }
}

// a tight right vertex either ends the search through augment or queues its partner
fn extend<T: NumAssign + Copy>(j: usize, slack: &[T], queue: &mut Vec<usize>, predecessor: &[usize], left_match: &mut [usize], right_match: &mut [usize]) -> bool {
    if slack[j] != T::zero() {
        return false;
    }
    if right_match[j] == usize::MAX {
        augment(j, predecessor, left_match, right_match);
        return true;
    }
    queue.push(right_match[j]);
    false
}

/// Minimum weight matching that covers every left vertex of a complete bipartite graph, `weights[i][j]`
/// being the weight between left `i` and right `j`. Requires `|L| <= |R|`; returns `(i, j)` for every left `i`.
///
/// Potentials are not bounded by the weights, so use a wide `T` (`i64` or larger).
pub fn hungarian<T>(weights: &[Vec<T>]) -> Vec<(usize, usize)>
where
    T: NumAssign + Bounded + Ord + Copy,
{
    let num_left = weights.len();
    if num_left == 0 {
        return Vec::new();
    }
    let num_right = weights[0].len();
    assert!(num_left <= num_right, "more left vertices ({num_left}) than right vertices ({num_right})");
    assert!(weights.iter().all(|row| row.len() == num_right), "rows of different lengths");

    let inf = T::max_value();
    let mut left_potential: Vec<T> = weights.iter().map(|row| row.iter().copied().fold(inf, std::cmp::min)).collect();
    let mut right_potential = vec![T::zero(); num_right];
    let (mut left_match, mut right_match) = (vec![usize::MAX; num_left], vec![usize::MAX; num_right]);

    for source in 0..num_left {
        let mut queue = vec![source];
        let mut predecessor = vec![usize::MAX; num_right];
        let mut slack = vec![inf; num_right]; // smallest reduced weight from a queued left vertex

        let mut index = 0;
        'search: while index < queue.len() {
            let i = queue[index];
            for j in 0..num_right {
                if j == left_match[i] {
                    continue;
                }
                let reduced = weights[i][j] - left_potential[i] - right_potential[j];
                if slack[j] > reduced {
                    slack[j] = reduced;
                    predecessor[j] = i;
                    if extend(j, &slack, &mut queue, &predecessor, &mut left_match, &mut right_match) {
                        break 'search;
                    }
                }
            }

            if index + 1 == queue.len() {
                let delta = slack.iter().copied().filter(|&s| s != T::zero()).fold(inf, std::cmp::min);
                for &k in queue.iter() {
                    left_potential[k] += delta;
                }

                let mut found = false;
                for j in 0..num_right {
                    if slack[j] != T::zero() {
                        slack[j] -= delta;
                        if !found {
                            found = extend(j, &slack, &mut queue, &predecessor, &mut left_match, &mut right_match);
                        }
                    } else {
                        right_potential[j] -= delta;
                    }
                }
                if found {
                    break 'search;
                }
            }
            index += 1;
        }
    }

    (0..num_left).map(|i| (i, left_match[i])).collect()
}

pub fn matching_cost<T>(weights: &[Vec<T>], matching: &[(usize, usize)]) -> T
where
    T: NumAssign + Copy,
{
    matching.iter().fold(T::zero(), |sum, &(i, j)| sum + weights[i][j])
}
