use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::init::randn_value;
use crate::nn::module::Module;
use crate::value::Value;

/// Scale applied to the N(0, 1) samples used for filter weights and biases.
const INIT_SCALE: f64 = 0.1;

/// Valid (no padding, stride 1) 2-D convolution over a single-channel grid of values.
///
/// For every filter `f` and every output position `(i, j)`:
///
/// ```text
/// out[f][i * out_w + j] = tanh( sum_{ki, kj} x[i + ki][j + kj] * filter_f[ki][kj] + bias_f )
/// ```
///
/// Each channel is returned flattened in row-major order, so it holds
/// `(height - k + 1) * (width - k + 1)` values.
#[derive(Debug, Clone)]
pub struct Conv2d {
    height: usize,
    width: usize,
    kernel_size: usize,
    /// One row-major `kernel_size * kernel_size` block per filter.
    filters: Vec<Vec<Value>>,
    biases: Vec<Value>,
    label: String,
}

impl Conv2d {
    /// Creates a convolution for `height x width` inputs with `num_filters`
    /// square kernels of side `kernel_size`.
    ///
    /// Weights are labelled `{label}:filter_{f}_{i}_{j}` and biases `{label}:bias_{f}`.
    ///
    /// # Errors
    /// `InvalidKernelSize` if the kernel is empty or larger than the input.
    pub fn new<R: Rng + ?Sized>(
        height: usize,
        width: usize,
        kernel_size: usize,
        num_filters: usize,
        label: impl Into<String>,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if kernel_size == 0 || kernel_size > height || kernel_size > width {
            return Err(ScalarGradError::InvalidKernelSize {
                kernel_size,
                height,
                width,
            });
        }
        let label = label.into();

        let filters = (0..num_filters)
            .map(|f| {
                let mut filter = Vec::with_capacity(kernel_size * kernel_size);
                for i in 0..kernel_size {
                    for j in 0..kernel_size {
                        filter.push(randn_value(
                            rng,
                            INIT_SCALE,
                            format!("{}:filter_{}_{}_{}", label, f, i, j),
                        ));
                    }
                }
                filter
            })
            .collect();
        let biases = (0..num_filters)
            .map(|f| randn_value(rng, INIT_SCALE, format!("{}:bias_{}", label, f)))
            .collect();

        Ok(Conv2d {
            height,
            width,
            kernel_size,
            filters,
            biases,
            label,
        })
    }

    pub fn kernel_size(&self) -> usize {
        self.kernel_size
    }

    pub fn num_filters(&self) -> usize {
        self.filters.len()
    }

    pub fn output_height(&self) -> usize {
        self.height - self.kernel_size + 1
    }

    pub fn output_width(&self) -> usize {
        self.width - self.kernel_size + 1
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Row-major weights of filter `f`.
    pub fn filter(&self, f: usize) -> Option<&[Value]> {
        self.filters.get(f).map(Vec::as_slice)
    }

    pub fn bias(&self, f: usize) -> Option<&Value> {
        self.biases.get(f)
    }

    /// Overwrites the weights of filter `f` with `weights` (row-major).
    ///
    /// The existing leaves keep their identity, so handles returned by
    /// `parameters()` stay valid.
    pub fn set_filter(&self, f: usize, weights: &[f64]) -> Result<(), ScalarGradError> {
        let filter = self
            .filters
            .get(f)
            .ok_or_else(|| ScalarGradError::IndexOutOfRange {
                index: f,
                len: self.filters.len(),
                operation: "Conv2d::set_filter".to_string(),
            })?;
        if weights.len() != filter.len() {
            return Err(ScalarGradError::InputLengthMismatch {
                expected: filter.len(),
                actual: weights.len(),
                operation: "Conv2d::set_filter".to_string(),
            });
        }
        for (param, &w) in filter.iter().zip(weights) {
            param.set_data(w)?;
        }
        Ok(())
    }

    pub fn set_bias(&self, f: usize, bias: f64) -> Result<(), ScalarGradError> {
        let param = self
            .biases
            .get(f)
            .ok_or_else(|| ScalarGradError::IndexOutOfRange {
                index: f,
                len: self.biases.len(),
                operation: "Conv2d::set_bias".to_string(),
            })?;
        param.set_data(bias)
    }

    fn check_input_shape(&self, input: &[Vec<Value>]) -> Result<(), ScalarGradError> {
        let rows = input.len();
        let bad_row = input.iter().find(|row| row.len() != self.width);
        if rows != self.height || bad_row.is_some() {
            let cols = bad_row.or_else(|| input.first()).map_or(0, Vec::len);
            return Err(ScalarGradError::InputShapeMismatch {
                expected: (self.height, self.width),
                actual: (rows, cols),
                operation: format!("Conv2d({})::forward", self.label),
            });
        }
        Ok(())
    }
}

impl Module for Conv2d {
    type Input = [Vec<Value>];
    type Output = Vec<Vec<Value>>;

    fn forward(&self, input: &[Vec<Value>]) -> Result<Vec<Vec<Value>>, ScalarGradError> {
        self.check_input_shape(input)?;
        let k = self.kernel_size;
        let (out_h, out_w) = (self.output_height(), self.output_width());

        let mut channels = Vec::with_capacity(self.filters.len());
        for (filter, bias) in self.filters.iter().zip(&self.biases) {
            let mut channel = Vec::with_capacity(out_h * out_w);
            for i in 0..out_h {
                for j in 0..out_w {
                    let mut products = (0..k)
                        .flat_map(|ki| (0..k).map(move |kj| (ki, kj)))
                        .map(|(ki, kj)| &input[i + ki][j + kj] * &filter[ki * k + kj]);
                    // k >= 1 is checked at construction.
                    let mut sum = products.next().unwrap_or_else(|| Value::new(0.0));
                    for p in products {
                        sum += p;
                    }
                    sum += bias;
                    channel.push(sum.tanh());
                }
            }
            channels.push(channel);
        }
        Ok(channels)
    }

    /// `[bias_0, .., bias_{F-1}, filter_0 (row-major), filter_1, ..]`
    fn parameters(&self) -> Vec<Value> {
        self.biases
            .iter()
            .chain(self.filters.iter().flatten())
            .cloned()
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let k = self.kernel_size;
        let biases = self
            .biases
            .iter()
            .enumerate()
            .map(|(f, b)| (format!("bias_{}", f), b.clone()));
        let filters = self.filters.iter().enumerate().flat_map(move |(f, filter)| {
            filter
                .iter()
                .enumerate()
                .map(move |(idx, w)| (format!("filter_{}_{}_{}", f, idx / k, idx % k), w.clone()))
        });
        biases.chain(filters).collect()
    }
}

#[cfg(test)]
#[path = "conv2d_test.rs"]
mod tests;
