use crate::domain::chips::Chips;

/// Разбить `amount` на `parts` долей как можно ровнее.
///
/// Каскадное деление: доля `k` получает `ceil(remaining / (parts - k))`,
/// остаток уменьшается. Сумма долей всегда равна `amount`, разница между
/// долями не больше одной фишки, а лишние фишки уходят первым долям
/// (раньше раны, меньший индекс игрока): 10 на 3 → 4, 3, 3.
///
/// При `parts == 0` возвращается пустой вектор.
pub fn split_evenly(amount: Chips, parts: usize) -> Vec<Chips> {
    let mut remaining = amount.0;
    let mut shares = Vec::with_capacity(parts);

    for k in 0..parts {
        let left = (parts - k) as u64;
        let share = remaining.div_ceil(left);
        shares.push(Chips(share));
        remaining -= share;
    }

    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(shares: Vec<Chips>) -> Vec<u64> {
        shares.into_iter().map(|c| c.0).collect()
    }

    #[test]
    fn remainder_goes_to_first_parts() {
        assert_eq!(raw(split_evenly(Chips(10), 3)), vec![4, 3, 3]);
        assert_eq!(raw(split_evenly(Chips(1000), 3)), vec![334, 333, 333]);
        assert_eq!(raw(split_evenly(Chips(100), 3)), vec![34, 33, 33]);
        assert_eq!(raw(split_evenly(Chips(11), 3)), vec![4, 4, 3]);
    }

    #[test]
    fn fewer_chips_than_parts() {
        assert_eq!(raw(split_evenly(Chips(2), 4)), vec![1, 1, 0, 0]);
        assert_eq!(raw(split_evenly(Chips::ZERO, 3)), vec![0, 0, 0]);
    }

    #[test]
    fn single_part_takes_everything() {
        assert_eq!(raw(split_evenly(Chips(777), 1)), vec![777]);
    }

    #[test]
    fn zero_parts_is_empty() {
        assert!(split_evenly(Chips(5), 0).is_empty());
    }

    #[test]
    fn shares_sum_up_and_differ_by_at_most_one() {
        for amount in 0..200u64 {
            for parts in 1..9usize {
                let shares = raw(split_evenly(Chips(amount), parts));
                assert_eq!(shares.len(), parts);
                assert_eq!(shares.iter().sum::<u64>(), amount);

                let max = *shares.iter().max().unwrap();
                let min = *shares.iter().min().unwrap();
                assert!(max - min <= 1, "{amount}/{parts}: {shares:?}");

                // Невозрастающая последовательность: остаток в начале.
                assert!(shares.windows(2).all(|w| w[0] >= w[1]));
                assert_eq!(shares, raw(split_evenly(Chips(amount), parts)));
            }
        }
    }
}
