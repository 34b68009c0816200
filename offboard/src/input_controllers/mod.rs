pub mod json_line_input_controller;
