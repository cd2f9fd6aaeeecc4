pub mod hit_object;
