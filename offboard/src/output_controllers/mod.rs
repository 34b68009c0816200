pub mod json_line_output_controller;
