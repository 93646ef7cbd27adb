use subtle::ConstantTimeEq;

/// Compare two byte slices without branching on their content.
///
/// Slices of different length compare unequal immediately; equal-length
/// slices are compared in constant time regardless of where they first
/// differ. Returns `false` on mismatch, never an error.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
