use pauli_majorana::{
    expr::MajoranaExpr,
    gate::Gate,
    majorana::MajoranaString,
    pauli::Pauli,
    pauli_string::PauliString,
    phase::Phase,
};
use proptest::prelude::*;

fn arbitrary_phase() -> impl Strategy<Value = Phase> {
    (0..4_i8).prop_map(Phase::from_int)
}

fn arbitrary_pauli_of_length(n: usize) -> impl Strategy<Value = PauliString> {
    (arbitrary_phase(), prop::collection::vec((0..4_usize).prop_map(Pauli::from_int), n))
        .prop_map(|(phase, ops)| PauliString::new(phase, ops))
}

fn arbitrary_pauli(max_len: usize) -> impl Strategy<Value = PauliString> {
    (0..=max_len).prop_flat_map(arbitrary_pauli_of_length)
}

fn arbitrary_majorana(max_len: usize, max_index: usize)
    -> impl Strategy<Value = MajoranaString>
{
    (arbitrary_phase(), prop::collection::vec(0..max_index, 0..=max_len))
        .prop_map(|(phase, indices)| MajoranaString::new(phase, indices))
}

// a gate acting within `n >= 2` qubits, with distinct indices for two-qubit
// gates
fn arbitrary_gate(n: usize) -> impl Strategy<Value = Gate> {
    let single = (0..n, 0..6_usize).prop_map(|(k, kind)| match kind {
        0 => Gate::H(k),
        1 => Gate::S(k),
        2 => Gate::Sdg(k),
        3 => Gate::X(k),
        4 => Gate::Y(k),
        _ => Gate::Z(k),
    });
    let double = (0..n, 1..n, 0..3_usize).prop_map(move |(a, d, kind)| {
        let b = (a + d) % n;
        match kind {
            0 => Gate::CZ(a, b),
            1 => Gate::CX(a, b),
            _ => Gate::Swap(a, b),
        }
    });
    prop_oneof![single, double]
}

fn inverse(gate: Gate) -> Gate {
    match gate {
        Gate::S(k) => Gate::Sdg(k),
        Gate::Sdg(k) => Gate::S(k),
        g => g,
    }
}

prop_compose! {
    fn pauli_pair_and_gate(max_len: usize)(n in 2..=max_len)(
        a in arbitrary_pauli_of_length(n),
        b in arbitrary_pauli_of_length(n),
        gate in arbitrary_gate(n)
    ) -> (PauliString, PauliString, Gate) {
        (a, b, gate)
    }
}

proptest! {
    #[test]
    fn pauli_majorana_round_trip(p in arbitrary_pauli(8)) {
        let m = p.to_majorana_string();
        prop_assert!(m.is_normalized());
        prop_assert_eq!(m.to_pauli_string(), p.trimmed());
    }

    #[test]
    fn majorana_pauli_round_trip(m in arbitrary_majorana(10, 16)) {
        let n = m.normalized();
        prop_assert_eq!(m.to_pauli_string().to_majorana_string(), n);
    }

    #[test]
    fn normalize_is_canonical(m in arbitrary_majorana(12, 8)) {
        let n = m.normalized();
        prop_assert!(n.is_normalized());
        prop_assert_eq!(n.normalized(), n.clone());
        prop_assert!(
            m.to_pauli_string().is_equivalent(&n.to_pauli_string()),
            "{} -> {}", m, n
        );
    }

    #[test]
    fn combine_is_associative(
        a in arbitrary_pauli(6),
        b in arbitrary_pauli(6),
        c in arbitrary_pauli(6)
    ) {
        prop_assert_eq!(a.combine(&b).combine(&c), a.combine(&b.combine(&c)));
    }

    #[test]
    fn squares_are_scalars(p in arbitrary_pauli(8)) {
        let pp = p.combine(&p);
        prop_assert!(pp.is_identity());
        prop_assert_eq!(pp.phase, p.phase + p.phase);
    }

    #[test]
    fn commutation_matches_products(a in arbitrary_pauli(6), b in arbitrary_pauli(6)) {
        let ab = a.combine(&b);
        let ba = b.combine(&a);
        prop_assert_eq!(a.commutes_with(&b), ab == ba);
        prop_assert_eq!(
            a.to_majorana_string().commutes_with(&b.to_majorana_string()),
            a.commutes_with(&b)
        );
    }

    #[test]
    fn gates_are_automorphisms((a, b, gate) in pauli_pair_and_gate(6)) {
        let mut ab = a.combine(&b);
        ab.apply_gate(gate);
        let mut ga = a.clone();
        ga.apply_gate(gate);
        let mut gb = b.clone();
        gb.apply_gate(gate);
        prop_assert_eq!(ab, ga.combine(&gb));
    }

    #[test]
    fn gates_are_invertible((a, _b, gate) in pauli_pair_and_gate(6)) {
        let mut p = a.clone();
        p.apply_gate(gate).apply_gate(inverse(gate));
        prop_assert_eq!(p, a);
    }

    #[test]
    fn strict_display_round_trip(p in arbitrary_pauli(8), m in arbitrary_majorana(8, 40)) {
        prop_assert_eq!(p.to_string().parse::<PauliString>(), Ok(p.clone()));
        prop_assert_eq!(m.to_string().parse::<MajoranaString>(), Ok(m.clone()));
    }

    #[test]
    fn expr_products_follow_strings(a in arbitrary_majorana(6, 8), b in arbitrary_majorana(6, 8)) {
        let lhs = MajoranaExpr::from(a.clone()) * MajoranaExpr::from(b.clone());
        prop_assert_eq!(lhs, MajoranaExpr::from(a.combine(&b)));
    }
}
