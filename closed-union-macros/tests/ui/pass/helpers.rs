use closed_union::ClosedUnion;

#[closed_union::union(name = "Shape", derive(Debug))]
mod shapes {
    #[derive(Debug)]
    pub struct Circle {
        pub radius: f64,
    }

    #[derive(Debug)]
    pub struct Square {
        pub side: f64,
    }

    #[union(skip)]
    pub struct Scale(pub f64);

    impl Circle {
        pub fn area(&self) -> f64 {
            ::std::f64::consts::PI * self.radius * self.radius
        }
    }

    pub fn unit_circle() -> Shape {
        Shape::circle(1.0)
    }

    pub fn scaled(shape: Shape, scale: Scale) -> Shape {
        match shape {
            Shape::Circle(circle) => Shape::circle(circle.radius * scale.0),
            Shape::Square(square) => Shape::square(square.side * scale.0),
        }
    }
}

fn main() {
    let circle = shapes::unit_circle();
    match &circle {
        Shape::Circle(inner) => assert!((inner.area() - ::std::f64::consts::PI).abs() < 1e-9),
        Shape::Square(_) => panic!("expected a circle"),
    }

    let square: Shape = shapes::Square { side: 2.0 }.into();
    assert_eq!(square.case_name(), "Square");

    match shapes::scaled(square, shapes::Scale(3.0)) {
        Shape::Square(square) => assert_eq!(square.side, 6.0),
        other => panic!("unexpected {:?}", other),
    }

    assert_eq!(<Shape as ClosedUnion>::CASES, &["Circle", "Square"]);
}
