use bitbuf::{BitBuffer, WORD_BITS};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Set(usize),
    Clear(usize),
    Toggle(usize),
}

fn arb_op(max_bit: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..max_bit).prop_map(Op::Set),
        (0..max_bit).prop_map(Op::Clear),
        (0..max_bit).prop_map(Op::Toggle),
    ]
}

// Strategy for generating buffers from raw bytes
prop_compose! {
    fn arb_buffer()
        (bytes in prop::collection::vec(any::<u8>(), 1..64))
        -> BitBuffer
    {
        BitBuffer::from_bytes(&bytes)
    }
}

proptest! {
    #[test]
    fn test_ops_match_bool_model(
        len in 0usize..32,
        ops in prop::collection::vec(arb_op(600), 0..100)
    ) {
        let mut buf = BitBuffer::new(len);
        // Models the whole storage, including bits past the declared length
        let mut model = vec![false; buf.capacity_bits()];

        for op in ops {
            let i = match op {
                Op::Set(i) => { buf.set(i); i }
                Op::Clear(i) => { buf.clear(i); i }
                Op::Toggle(i) => { buf.toggle(i); i }
            };
            if i >= model.len() {
                model.resize((i / WORD_BITS + 1) * WORD_BITS, false);
                prop_assert_eq!(buf.len_bits(), model.len());
            }
            model[i] = match op {
                Op::Set(_) => true,
                Op::Clear(_) => false,
                Op::Toggle(_) => !model[i],
            };
        }

        prop_assert_eq!(buf.capacity_bits(), model.len());
        model.truncate(buf.len_bits());
        prop_assert_eq!(buf.to_bools(), model);
    }

    #[test]
    fn test_count_bits_matches_bytes(buf in arb_buffer()) {
        let ones: usize = buf.to_bytes().iter().map(|b| b.count_ones() as usize).sum();
        prop_assert_eq!(buf.count_bits(), (ones, buf.len_bits() - ones));
    }

    #[test]
    fn test_bit_string_matches_bools(buf in arb_buffer()) {
        let expected: String = buf.to_bools().iter().map(|&b| if b { '1' } else { '0' }).collect();
        prop_assert_eq!(buf.to_bit_string(), expected);
    }

    #[test]
    fn test_parse_inverts_rendering(buf in arb_buffer()) {
        let parsed: BitBuffer = buf.to_bit_string().parse().unwrap();
        prop_assert_eq!(parsed, buf);
    }

    #[test]
    fn test_compare_matches_byte_slices(a in arb_buffer(), b in arb_buffer()) {
        prop_assert_eq!(a.compare(&b), a.to_bytes().cmp(&b.to_bytes()));
        prop_assert_eq!(a == b, a.to_bytes() == b.to_bytes());
    }

    #[test]
    fn test_growth_preserves_prefix(buf in arb_buffer(), far in 0usize..4096) {
        let before = buf.to_bools();
        let mut grown = buf.clone();
        grown.set(buf.capacity_bits() + far);

        prop_assert!(grown.len_bits() > far);
        prop_assert_eq!(&grown.to_bools()[..before.len()], &before[..]);
    }

    #[test]
    fn test_copy_from_makes_equal(a in arb_buffer(), b in arb_buffer()) {
        let mut dst = b.clone();
        dst.copy_from(&a);
        prop_assert_eq!(&dst, &a);
        prop_assert_eq!(dst.to_bytes(), a.to_bytes());
    }
}
