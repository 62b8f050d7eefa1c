pub mod a001_sketch_image;
