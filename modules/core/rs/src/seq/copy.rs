use eyre::{eyre, Result};

use super::ops::{ResizeOp, SeqOp, SeqOpMut};

/// Copy `src` into `dest`, resizing `dest` defensively first.
///
/// Growable destinations take the source length. Fixed-extent destinations
/// (borrowed ranges, bare slices) accept the copy only when the lengths
/// already match and fail otherwise, before any element is written.
pub fn copy_into<S, D>(src: &S, dest: &mut D) -> Result<D::Len>
where
    S: SeqOp + ?Sized,
    S::Item: Clone,
    D: SeqOpMut<Item = S::Item> + ResizeOp + ?Sized,
{
    let wanted: D::Len = num::cast(src.len()).ok_or_else(|| {
        eyre!(
            "Source length {:?} does not fit the destination count type",
            src.len()
        )
    })?;

    let len = dest.resize(wanted)?;
    for (slot, item) in dest.iter_mut().zip(src.iter()) {
        *slot = item.clone();
    }
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_grows_vec() {
        let src = vec![1, 2, 3, 4];
        let mut dest: Vec<i32> = Vec::new();

        assert_eq!(copy_into(&src, &mut dest).unwrap(), 4);
        assert_eq!(dest, src);
    }

    #[test]
    fn test_copy_into_matching_slice() {
        let src = vec![5, 6];
        let mut dest = [0, 0];

        assert_eq!(copy_into(&src, &mut dest[..]).unwrap(), 2);
        assert_eq!(dest, [5, 6]);
    }

    #[test]
    fn test_copy_into_mismatched_slice() {
        let src = vec![5, 6, 7];
        let mut dest = [0, 0];

        assert!(copy_into(&src, &mut dest[..]).is_err());
        assert_eq!(dest, [0, 0]);
    }
}
