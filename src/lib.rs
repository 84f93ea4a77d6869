pub mod prelude;
pub mod cube_root{
    pub mod digit_recurrence;
    pub mod reference_roots;
}
