// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub const ATTENDANCE_PAGE: &str = r#"<html><body>
<table id="PDGcourpercView">
    <tr><td>COURSE CODE</td><td>TOTAL HOURS</td><td>EXEMPTION HOURS</td><td>TOTAL ABSENT</td>
        <td>TOTAL PRESENT</td><td>PERCENTAGE OF ATTENDANCE</td><td>PERCENTAGE WITH EXEMP</td></tr>
    <tr><td>20XW51 - THEORY</td><td>40</td><td>0</td><td>4</td><td>36</td><td>90</td><td>90</td></tr>
    <tr><td>20XW52 - LAB</td><td>30</td><td>0</td><td>12</td><td>18</td><td>60</td><td>60</td></tr>
</table>
</body></html>"#;

pub const COURSE_PAGE: &str = r#"<html><body>
<table id="PDGCourse">
    <tr><td>COURSE CODE</td><td>COURSE TITLE</td><td>PROGRAM</td><td>CATEGORY</td>
        <td>SEMESTER</td><td>MONTH/YEAR</td><td>GRADE</td><td>CREDITS</td></tr>
    <tr><td>20X101</td><td>Calculus</td><td>BE</td><td>BS</td><td>1</td><td>APR 2022</td><td>O</td><td>4</td></tr>
    <tr><td>20X102</td><td>Physics</td><td>BE</td><td>BS</td><td>1</td><td>APR 2022</td><td>A+</td><td>3</td></tr>
    <tr><td>20X201</td><td>Algorithms</td><td>BE</td><td>PC</td><td>2</td><td>NOV 2022</td><td>A</td><td>4</td></tr>
    <tr><td>20X202</td><td>Databases</td><td>BE</td><td>PC</td><td>2</td><td>NOV 2022</td><td>B+</td><td>3</td></tr>
</table>
<table id="Prettydatagrid3">
    <tr><td>COURSE CODE</td><td>COURSE TITLE</td><td>PROGRAM</td><td>CATEGORY</td><td>SEMESTER</td></tr>
    <tr><td>20XW51</td><td>Theory of Computing</td><td>BE</td><td>PC</td><td>3</td></tr>
    <tr><td>20XW52</td><td>Networks Lab</td><td>BE</td><td>PC</td><td>3</td></tr>
</table>
</body></html>"#;

pub const NEW_STUDENT_COURSE_PAGE: &str = r#"<html><body>
<table id="PDGCourse">
    <tr><td>COURSE CODE</td><td>COURSE TITLE</td><td>PROGRAM</td><td>CATEGORY</td>
        <td>SEMESTER</td><td>MONTH/YEAR</td><td>GRADE</td><td>CREDITS</td></tr>
</table>
</body></html>"#;

pub const EXAM_PAGE: &str = r#"<html><body>
<div class="Test-card">
    <div class="text-left">
        <span class="sol">:20XW51</span><span class="sol">Date</span>
        <span class="sol">:12-03-25</span><span class="sol">Time</span>
        <span class="sol">:09:30 AM</span>
    </div>
</div>
</body></html>"#;

pub const INTERNALS_PAGE: &str = r#"<html><body>
<table>
    <tr><td>COURSE CODE</td><td>COURSE TITLE</td><td>T1</td><td>T2</td><td>AP1</td>
        <td>AP2</td><td>AP3</td><td>TOTAL/50</td><td>TOTAL/40</td><td>REMARK</td></tr>
    <tr><td>20XW51</td><td>Theory of Computing</td><td>30</td><td>25</td><td>5</td>
        <td>5</td><td>*</td><td>20</td><td>10</td><td>-</td></tr>
</table>
</body></html>"#;

pub const PROFILE_PAGE: &str = r#"<html><body>
<table>
    <tr><td>Roll No</td><td>:</td><td>21Z201</td></tr>
    <tr><td>Name :</td><td>Asha R</td></tr>
</table>
</body></html>"#;
