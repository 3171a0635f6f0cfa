use super::GameStatement;
use crate::error::{Error, Result};
use rand::Rng;

/// Draws one statement uniformly at random, with replacement
///
/// The random source is injected so callers can replay a deterministic sequence.
pub fn pick<'a, R>(table: &'a [GameStatement], rng: &mut R) -> Result<&'a GameStatement>
where
    R: Rng + ?Sized,
{
    Ok(&table[pick_index(table, rng)?])
}

/// Position in `table` of a uniformly drawn statement
pub fn pick_index<R>(table: &[GameStatement], rng: &mut R) -> Result<usize>
where
    R: Rng + ?Sized,
{
    if table.is_empty() {
        return Err(Error::EmptyStatementTable);
    }
    Ok(rng.gen_range(0..table.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::StatementBank;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_table() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            pick(&[], &mut rng),
            Err(Error::EmptyStatementTable)
        ));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let bank = StatementBank::built_in();
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(
                pick(bank.statements(), &mut first).unwrap(),
                pick(bank.statements(), &mut second).unwrap()
            );
        }
    }

    #[test]
    fn test_index_and_statement_draws_agree() {
        let bank = StatementBank::built_in();
        let table = bank.statements();
        let mut by_index = StdRng::seed_from_u64(9);
        let mut by_statement = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let index = pick_index(table, &mut by_index).unwrap();
            assert!(index < table.len());
            assert_eq!(&table[index], pick(table, &mut by_statement).unwrap());
        }
        assert!(matches!(
            pick_index(&[], &mut by_index),
            Err(Error::EmptyStatementTable)
        ));
    }

    #[test]
    fn test_single_entry_always_selected() {
        let bank = StatementBank::built_in();
        let only = &bank.statements()[..1];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(pick(only, &mut rng).unwrap(), &only[0]);
        }
    }
}
