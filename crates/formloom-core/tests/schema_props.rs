//! Property tests over the schema model's sequence operations.

use std::collections::HashSet;

use formloom_api::{FieldId, FieldType};
use formloom_core::FormSchema;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Append(usize),
    /// Remove the field at this position (modulo current length).
    Remove(usize),
    /// Reorder the fields at these positions (modulo current length).
    Reorder(usize, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..FieldType::ALL.len()).prop_map(Op::Append),
        (0usize..32).prop_map(Op::Remove),
        ((0usize..32), (0usize..32)).prop_map(|(a, b)| Op::Reorder(a, b)),
    ]
}

proptest! {
    /// Ids are never duplicated or lost: after any op sequence the id set
    /// equals the appended ids minus the removed ids, and the length
    /// matches the bookkeeping.
    #[test]
    fn id_set_and_length_are_conserved(ops in prop::collection::vec(op_strategy(), 0..48)) {
        let mut schema = FormSchema::new();
        let mut appended: Vec<FieldId> = Vec::new();
        let mut removed: HashSet<FieldId> = HashSet::new();

        for op in ops {
            match op {
                Op::Append(type_index) => {
                    let field_type = FieldType::ALL[type_index];
                    appended.push(schema.append(field_type).id.clone());
                }
                Op::Remove(raw) => {
                    if !schema.is_empty() {
                        let id = schema.fields()[raw % schema.len()].id.clone();
                        schema.remove(&id);
                        removed.insert(id);
                    }
                }
                Op::Reorder(raw_from, raw_to) => {
                    if !schema.is_empty() {
                        let from = schema.fields()[raw_from % schema.len()].id.clone();
                        let to = schema.fields()[raw_to % schema.len()].id.clone();
                        schema.reorder(&from, &to);
                    }
                }
            }

            let ids: Vec<&FieldId> = schema.ids().collect();
            let unique: HashSet<&FieldId> = ids.iter().copied().collect();
            prop_assert_eq!(ids.len(), unique.len(), "duplicate id in sequence");
        }

        let expected: HashSet<FieldId> = appended
            .iter()
            .filter(|id| !removed.contains(id))
            .cloned()
            .collect();
        let actual: HashSet<FieldId> = schema.ids().cloned().collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(schema.len(), appended.len() - removed.len());
    }

    /// Moving a field onto another, then moving it onto whatever now
    /// occupies its original index, restores the original order.
    #[test]
    fn reorder_round_trips((len, raw_from, raw_to) in (2usize..9).prop_flat_map(|len| {
        (Just(len), 0..len, 0..len)
    })) {
        let mut schema = FormSchema::new();
        for _ in 0..len {
            schema.append(FieldType::ShortText);
        }
        let original: Vec<FieldId> = schema.ids().cloned().collect();
        let moved = original[raw_from].clone();
        let target = original[raw_to].clone();

        schema.reorder(&moved, &target);
        let occupant = schema.fields()[raw_from].id.clone();
        schema.reorder(&moved, &occupant);

        let restored: Vec<FieldId> = schema.ids().cloned().collect();
        prop_assert_eq!(restored, original);
    }

    /// Reordering never changes the id set, only positions.
    #[test]
    fn reorder_preserves_membership((len, raw_from, raw_to) in (1usize..9).prop_flat_map(|len| {
        (Just(len), 0..len, 0..len)
    })) {
        let mut schema = FormSchema::new();
        for index in 0..len {
            let field_type = FieldType::ALL[index % FieldType::ALL.len()];
            schema.append(field_type);
        }
        let before: HashSet<FieldId> = schema.ids().cloned().collect();
        let from = schema.fields()[raw_from].id.clone();
        let to = schema.fields()[raw_to].id.clone();

        schema.reorder(&from, &to);

        let after: HashSet<FieldId> = schema.ids().cloned().collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(schema.len(), len);
    }
}
