#[inline]
pub fn id() -> usize {
    __get_id()
}

#[cfg(unix)]
#[inline]
fn __get_id() -> usize {
    unsafe {
        libc::pthread_self() as usize
    }
}

#[cfg(not(unix))]
#[inline]
fn __get_id() -> usize {
    0
}
