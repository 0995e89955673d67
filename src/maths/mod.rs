pub mod saspoint5;
