//! Cartesian product of per-component candidate lists.

/// Every combination picking one item from each list, in lexicographic
/// order of the list positions. Each combination owns clones of its items.
///
/// An empty list of lists yields a single empty combination; any empty
/// inner list yields no combinations.
pub(crate) fn cartesian_product<T: Clone>(lists: &[Vec<T>]) -> Vec<Vec<T>> {
    lists.iter().fold(vec![Vec::new()], |combinations, list| {
        combinations
            .iter()
            .flat_map(|prefix| {
                list.iter().map(move |item| {
                    let mut combination = prefix.clone();
                    combination.push(item.clone());
                    combination
                })
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_of_nothing_is_one_empty_combination() {
        let lists: Vec<Vec<u8>> = Vec::new();
        assert_eq!(cartesian_product(&lists), vec![Vec::<u8>::new()]);
    }

    #[test]
    fn product_enumerates_in_order() {
        let lists = vec![vec![1, 2], vec![3], vec![4, 5]];

        assert_eq!(
            cartesian_product(&lists),
            vec![vec![1, 3, 4], vec![1, 3, 5], vec![2, 3, 4], vec![2, 3, 5]]
        );
    }

    #[test]
    fn empty_factor_empties_product() {
        let lists = vec![vec![1, 2], Vec::new()];
        assert!(cartesian_product(&lists).is_empty());
    }
}
