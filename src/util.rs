/*
    Bit-level utilities
*/

use bitvec::prelude::Lsb0;
use num_bigint::BigUint;

pub(crate) type BitVec = bitvec::prelude::BitVec<u32, Lsb0>;

// Converts a `BitVec` to a `BigUint`
pub(crate) fn bitvec_to_biguint(bv: &BitVec) -> BigUint {
    let mut i = BigUint::default();
    for (k, b) in bv.iter().enumerate() {
        if *b {
            i.set_bit(k as u64, true);
        }
    }
    i
}

// Converts a `BigUint` to a `BitVec` of the given width,
// truncating or zero-extending as needed
pub(crate) fn biguint_to_bitvec(i: &BigUint, width: usize) -> BitVec {
    let mut bv = BitVec::repeat(false, width);
    for k in 0..width {
        bv.set(k, i.bit(k as u64));
    }
    bv
}
