pub mod u101_sketch_to_site;
