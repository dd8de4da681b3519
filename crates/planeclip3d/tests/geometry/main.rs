extern crate nalgebra as na;
