use crate::image::find_min_max;
use crate::types::FloatTensor;

/// Print the verbose conversion summary for a decoded tensor
pub fn print_summary(tensor: &FloatTensor, total_bytes: usize) {
    print_input_size(tensor, total_bytes);
    print_shape(tensor);
    print_value_range(tensor);
    println!();
}

fn print_input_size(tensor: &FloatTensor, total_bytes: usize) {
    let consumed = tensor.shape.byte_len();
    if total_bytes > consumed {
        println!(
            "{:20}: {total_bytes} bytes ({consumed} consumed)",
            "Input Size"
        );
    } else {
        println!("{:20}: {total_bytes} bytes", "Input Size");
    }
}

fn print_shape(tensor: &FloatTensor) {
    println!(
        "{:20}: {} [{} fp32 samples, little-endian]",
        "Tensor Shape",
        tensor.shape,
        tensor.shape.sample_count()
    );
}

fn print_value_range(tensor: &FloatTensor) {
    println!("{:20}: {}", "Value Range", find_min_max(&tensor.samples));
}
