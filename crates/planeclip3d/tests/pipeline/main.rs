extern crate nalgebra as na;

mod end_to_end;
