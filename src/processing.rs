use crate::error::ShellError;
use image::RgbImage;

/// Receives completion updates (0..=100 by convention) from a running processor.
pub trait ProgressSink {
    fn update_progress(&mut self, value: i32);
}

/// The processing step plugged into the shell.
///
/// Implementations get the original image by shared reference and return a
/// new buffer which the shell stores as the result. The result is expected to
/// have the same dimensions as the original; the shell only warns when it
/// does not. Processors run on a worker thread, hence `Send`.
pub trait ImageProcessor: Send {
    fn name(&self) -> &str;

    fn process(
        &mut self,
        original: &RgbImage,
        progress: &mut dyn ProgressSink,
    ) -> Result<RgbImage, ShellError>;
}

/// Wraps a closure so it can be installed as a processor.
pub struct FnProcessor<F> {
    name: String,
    func: F,
}

impl<F> FnProcessor<F>
where
    F: FnMut(&RgbImage, &mut dyn ProgressSink) -> Result<RgbImage, ShellError> + Send,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> ImageProcessor for FnProcessor<F>
where
    F: FnMut(&RgbImage, &mut dyn ProgressSink) -> Result<RgbImage, ShellError> + Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn process(
        &mut self,
        original: &RgbImage,
        progress: &mut dyn ProgressSink,
    ) -> Result<RgbImage, ShellError> {
        (self.func)(original, progress)
    }
}

/// Copies the original row by row. Stands in until a real processor is
/// installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Passthrough;

impl ImageProcessor for Passthrough {
    fn name(&self) -> &str {
        "passthrough"
    }

    fn process(
        &mut self,
        original: &RgbImage,
        progress: &mut dyn ProgressSink,
    ) -> Result<RgbImage, ShellError> {
        let (width, height) = original.dimensions();
        let mut result = RgbImage::new(width, height);

        progress.update_progress(0);
        let mut reported = 0;
        for y in 0..height {
            for x in 0..width {
                result.put_pixel(x, y, *original.get_pixel(x, y));
            }

            let done = ((y as u64 + 1) * 100 / height as u64) as i32;
            if done != reported {
                reported = done;
                progress.update_progress(done);
            }
        }
        if reported != 100 {
            progress.update_progress(100);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[derive(Default)]
    struct Recorded(Vec<i32>);

    impl ProgressSink for Recorded {
        fn update_progress(&mut self, value: i32) {
            self.0.push(value);
        }
    }

    #[test]
    fn passthrough_copies_and_reports_monotonic_progress() {
        let original = RgbImage::from_fn(7, 13, |x, y| Rgb([x as u8, y as u8, 42]));
        let mut progress = Recorded::default();

        let result = Passthrough.process(&original, &mut progress).unwrap();

        assert_eq!(result, original);
        assert_eq!(progress.0.first(), Some(&0));
        assert_eq!(progress.0.last(), Some(&100));
        assert!(progress.0.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn passthrough_handles_empty_images() {
        let mut progress = Recorded::default();

        let result = Passthrough.process(&RgbImage::new(0, 0), &mut progress).unwrap();

        assert_eq!(result.dimensions(), (0, 0));
        assert_eq!(progress.0, vec![0, 100]);
    }

    #[test]
    fn closures_can_act_as_processors() {
        let mut invert = FnProcessor::new("invert", |img: &RgbImage, p: &mut dyn ProgressSink| {
            let mut out = img.clone();
            image::imageops::invert(&mut out);
            p.update_progress(100);
            Ok(out)
        });
        let mut progress = Recorded::default();

        let result = invert
            .process(&RgbImage::from_pixel(2, 2, Rgb([0, 10, 255])), &mut progress)
            .unwrap();

        assert_eq!(invert.name(), "invert");
        assert_eq!(*result.get_pixel(1, 1), Rgb([255, 245, 0]));
        assert_eq!(progress.0, vec![100]);
    }
}
