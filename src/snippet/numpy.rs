use core::fmt::Write as _;

use super::{Dialect, SnippetOptions};
use crate::distribution::Distribution;

/// Python with NumPy's legacy global random state.
///
/// `np.random.seed` followed by the module-level sampling functions gives
/// the same sample on every NumPy version, which is what lets the learner's
/// pasted results be checked.
#[derive(Clone, Copy, Debug, Default)]
pub struct Numpy;

impl Dialect for Numpy {
    fn interpreter(&self) -> &'static str {
        "Python"
    }

    fn prologue(&self, seed: &str) -> String {
        format!("import numpy as np\nnp.random.seed({seed})\n")
    }

    fn sampling_line(&self, distribution: &Distribution, sample_size: &str) -> String {
        let n = sample_size;
        match *distribution {
            Distribution::Bernoulli { p } => format!("sample = np.random.binomial(1, {p}, {n})"),
            Distribution::Binomial { n: trials, p } => {
                format!("sample = np.random.binomial({trials}, {p}, {n})")
            }
            Distribution::Geometric { p } => format!("sample = np.random.geometric({p}, {n})"),
            Distribution::Poisson { lambda } => {
                format!("sample = np.random.poisson({lambda}, {n})")
            }
            Distribution::Uniform { a, b } => format!("sample = np.random.uniform({a}, {b}, {n})"),
            // NumPy takes the scale, the reciprocal of the rate.
            Distribution::Exponential { lambda } => {
                format!("sample = np.random.exponential(1 / {lambda}, {n})")
            }
            Distribution::Normal { mean, std_dev } => {
                format!("sample = np.random.normal({mean}, {std_dev}, {n})")
            }
        }
    }

    fn epilogue(&self, sample_size: &str, options: &SnippetOptions) -> String {
        let k = options.preview_len;
        let d = options.decimals;
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            r#"print(",".join([str(round(sample[i], {d})) for i in range({k})]))"#
        );
        let _ = writeln!(
            out,
            r#"print(",".join([str(round(sample[{sample_size} - {k} + i], {d})) for i in range({k})]))"#
        );
        out.push_str("print(sum(sample)/len(sample))\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prologue_seeds_global_state() {
        assert_eq!(
            Numpy.prologue("42"),
            "import numpy as np\nnp.random.seed(42)\n"
        );
    }

    #[test]
    fn epilogue_honours_options() {
        let options = SnippetOptions::builder()
            .preview_len(3)
            .decimals(4)
            .build()
            .unwrap();
        let epilogue = Numpy.epilogue("20", &options);
        let lines: Vec<&str> = epilogue.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"print(",".join([str(round(sample[i], 4)) for i in range(3)]))"#,
                r#"print(",".join([str(round(sample[20 - 3 + i], 4)) for i in range(3)]))"#,
                "print(sum(sample)/len(sample))",
            ]
        );
    }
}
