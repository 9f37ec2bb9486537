use base::Vec2;
use classifier::{ClassifyError, InputTensor, Preprocessor, Representation};
use image::{Frame, Image, PixelFormat, ResizeFilter};

fn frame_len(size: Vec2<usize>, format: PixelFormat) -> usize {
    format.expected_len(size).unwrap()
}

#[test]
fn test_tensor_length_is_fixed() {
    let cases = [
        (Vec2::new(640, 480), PixelFormat::Rgb8),
        (Vec2::new(640, 480), PixelFormat::Nv21),
        (Vec2::new(1920, 1080), PixelFormat::Bgra8),
        (Vec2::new(1280, 720), PixelFormat::Argb8),
        (Vec2::new(320, 240), PixelFormat::Yuyv),
        (Vec2::new(5, 3), PixelFormat::Yu12),
        (Vec2::new(7, 9), PixelFormat::Nv21),
        (Vec2::new(1, 1), PixelFormat::Rgb8),
    ];
    let preprocessor = Preprocessor::new(224, Representation::U8);
    for (size, format) in cases {
        let data = vec![128u8; frame_len(size, format)];
        let tensor = preprocessor.run(&Frame::new(size, &data, format)).unwrap();
        assert_eq!(tensor.len(), 224 * 224 * 3, "{:?} {}", format, size);
        assert_eq!(tensor.shape(), &[224, 224, 3]);
        assert_eq!(tensor.representation(), Representation::U8);
    }
    assert_eq!(preprocessor.input_len(), 224 * 224 * 3);
}

#[test]
fn test_other_input_sizes() {
    let size = Vec2::new(64, 48);
    let data = vec![0u8; frame_len(size, PixelFormat::Rgb8)];
    let frame = Frame::new(size, &data, PixelFormat::Rgb8);
    for input_size in [1, 96, 299] {
        let tensor = Preprocessor::new(input_size, Representation::U8).run(&frame).unwrap();
        assert_eq!(tensor.len(), input_size * input_size * 3);
    }
}

#[test]
fn test_float_values_in_unit_range() {
    let size = Vec2::new(4, 2);
    let mut data = vec![255u8; 12];
    data.extend(vec![0u8; 12]);
    let tensor = Preprocessor::new(8, Representation::F32)
        .run(&Frame::new(size, &data, PixelFormat::Rgb8))
        .unwrap();

    let InputTensor::F32(tensor) = &tensor else {
        panic!("expected float tensor");
    };
    assert!(tensor.data.iter().all(|v| (0.0..=1.0).contains(v)));
    assert_eq!(tensor.data[0], 1.0);
    assert_eq!(*tensor.data.last().unwrap(), 0.0);
}

#[test]
fn test_float_bytes_are_four_per_element() {
    let data = [10u8, 20, 30];
    let tensor = Preprocessor::new(2, Representation::F32)
        .run(&Frame::new(Vec2::new(1, 1), &data, PixelFormat::Rgb8))
        .unwrap();
    assert_eq!(tensor.to_ne_bytes().len(), 2 * 2 * 3 * 4);
}

#[test]
fn test_channel_order_is_rgb() {
    // BGRA blue pixel
    let data = [255u8, 0, 0, 255];
    let tensor = Preprocessor::new(1, Representation::U8)
        .run(&Frame::new(Vec2::new(1, 1), &data, PixelFormat::Bgra8))
        .unwrap();
    let InputTensor::U8(tensor) = tensor else {
        panic!("expected byte tensor");
    };
    assert_eq!(tensor.data, vec![0, 0, 255]);
}

#[test]
fn test_mirror_swaps_columns() {
    let data = [255u8, 0, 0, 0, 0, 255];
    let frame = Frame::new(Vec2::new(2, 1), &data, PixelFormat::Rgb8);

    let plain = Preprocessor::new(2, Representation::U8).run(&frame).unwrap();
    let mirrored = Preprocessor::new(2, Representation::U8)
        .with_mirror(true)
        .run(&frame)
        .unwrap();

    let (InputTensor::U8(plain), InputTensor::U8(mirrored)) = (plain, mirrored) else {
        panic!("expected byte tensors");
    };
    assert_eq!(&plain.data[0..6], &[255, 0, 0, 0, 0, 255]);
    assert_eq!(&mirrored.data[0..6], &[0, 0, 255, 255, 0, 0]);
}

#[test]
fn test_triangle_filter_keeps_shape() {
    let size = Vec2::new(640, 480);
    let data = vec![77u8; frame_len(size, PixelFormat::Rgb8)];
    let tensor = Preprocessor::new(224, Representation::U8)
        .with_filter(ResizeFilter::Triangle)
        .run(&Frame::new(size, &data, PixelFormat::Rgb8))
        .unwrap();
    let InputTensor::U8(tensor) = tensor else {
        panic!("expected byte tensor");
    };
    assert_eq!(tensor.len(), 224 * 224 * 3);
    assert!(tensor.data.iter().all(|&v| v == 77));
}

#[test]
fn test_jpeg_frame() {
    let raster = Image::new(Vec2::new(32, 24), vec![90u8; 32 * 24 * 3], PixelFormat::Rgb8);
    let jpeg = image::rgb_to_jpeg(&raster, 90).unwrap();
    let tensor = Preprocessor::new(224, Representation::U8)
        .run(&Frame::new(Vec2::new(32, 24), &jpeg, PixelFormat::Jpeg))
        .unwrap();
    assert_eq!(tensor.len(), 224 * 224 * 3);
}

#[test]
fn test_undecodable_frames() {
    let preprocessor = Preprocessor::new(224, Representation::U8);
    let short = [0u8; 100];
    let frames = [
        Frame::new(Vec2::new(640, 480), &[], PixelFormat::Nv21),
        Frame::new(Vec2::new(0, 480), &short, PixelFormat::Rgb8),
        Frame::new(Vec2::new(640, 480), &short, PixelFormat::Nv21),
        Frame::new(Vec2::new(3, 1), &short, PixelFormat::Yuyv),
        Frame::new(Vec2::new(8, 8), &short, PixelFormat::Jpeg),
    ];
    for frame in frames {
        let result = preprocessor.run(&frame);
        assert!(matches!(result, Err(ClassifyError::Decode(_))), "{:?}", frame.format);
    }
}
